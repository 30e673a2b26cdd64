use crate::{
    obs::{EventSink, StoreEvent},
    record::{
        FIELD_DEPARTMENT, FIELD_EMAIL, FIELD_NAME, FIELD_QUALIFICATION, Record, RecordId,
    },
    value::Value,
};
use std::collections::BTreeMap;

///
/// RecordStore
///
/// Exclusive owner of the ordered record list. Ids come from a monotone
/// counter that never rewinds, so ids stay unique but need not stay dense
/// after deletes. Mutations against unknown ids are silent no-ops; the UI
/// only ever hands back ids taken from the current list.
///

#[derive(Default)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
    sink: Option<Box<dyn EventSink>>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the single demo row the table ships with.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.create(BTreeMap::from([
            (FIELD_NAME.to_string(), Value::text("Vedang")),
            (FIELD_EMAIL.to_string(), Value::text("test@example.com")),
            (
                FIELD_DEPARTMENT.to_string(),
                Value::text("HSC/Diploma/UG/PG"),
            ),
            (FIELD_QUALIFICATION.to_string(), Value::text("HSC")),
        ]));
        store
    }

    pub fn attach_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    fn emit(&self, event: StoreEvent) {
        if let Some(sink) = &self.sink {
            sink.on_event(event);
        }
    }

    /// Append a new record under the next id. Business fields are not
    /// checked for uniqueness; duplicate names or emails are allowed.
    pub fn create(&mut self, values: BTreeMap<String, Value>) -> RecordId {
        self.next_id += 1;
        let id = RecordId::new(self.next_id);
        self.records.push(Record::new(id, values));
        self.emit(StoreEvent::Created { id });

        id
    }

    /// Overwrite the matched record's fields one by one with everything
    /// present in `values`; keys absent from `values` survive.
    pub fn update(&mut self, id: RecordId, values: BTreeMap<String, Value>) {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return;
        };

        for (field, value) in values {
            record.fields.insert(field, value);
        }
        self.emit(StoreEvent::Updated { id });
    }

    /// Remove the record with the matching id. The id counter is not
    /// rewound.
    pub fn delete(&mut self, id: RecordId) {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);

        if self.records.len() != before {
            self.emit(StoreEvent::Deleted { id });
        }
    }

    /// Wholesale replacement, used by import. Content is taken as-is; the
    /// counter restarts above the highest imported id so future creates
    /// stay unique.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.next_id = records.iter().map(|r| r.id.get()).max().unwrap_or(0);
        self.records = records;
        self.emit(StoreEvent::Replaced {
            len: self.records.len(),
        });
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct RecordingSink(Rc<RefCell<Vec<StoreEvent>>>);

    impl EventSink for RecordingSink {
        fn on_event(&self, event: StoreEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    fn values(name: &str) -> BTreeMap<String, Value> {
        BTreeMap::from([(FIELD_NAME.to_string(), Value::text(name))])
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = RecordStore::new();

        let a = store.create(values("a"));
        let b = store.create(values("b"));

        assert_eq!(a, RecordId::new(1));
        assert_eq!(b, RecordId::new(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_then_delete_restores_list_without_rewinding() {
        let mut store = RecordStore::new();
        store.create(values("a"));
        let snapshot = store.records().to_vec();

        let id = store.create(values("b"));
        store.delete(id);

        assert_eq!(store.records(), snapshot.as_slice());

        // the counter moved on
        let next = store.create(values("c"));
        assert_eq!(next, RecordId::new(3));
    }

    #[test]
    fn update_overwrites_field_by_field() {
        let mut store = RecordStore::new();
        let id = store.create(BTreeMap::from([
            (FIELD_NAME.to_string(), Value::text("a")),
            ("customField_Color".to_string(), Value::text("Red")),
        ]));

        store.update(id, values("b"));

        let record = store.get(id).unwrap();
        assert_eq!(record.get(FIELD_NAME), Some(&Value::text("b")));
        // untouched keys survive the shallow merge
        assert_eq!(record.get("customField_Color"), Some(&Value::text("Red")));
    }

    #[test]
    fn update_and_delete_of_unknown_id_are_noops() {
        let mut store = RecordStore::new();
        store.create(values("a"));
        let snapshot = store.records().to_vec();

        store.update(RecordId::new(99), values("x"));
        store.delete(RecordId::new(99));

        assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn replace_all_resumes_above_highest_id() {
        let mut store = RecordStore::new();
        store.replace_all(vec![
            Record::new(RecordId::new(4), BTreeMap::new()),
            Record::new(RecordId::new(2), BTreeMap::new()),
        ]);

        let id = store.create(values("new"));
        assert_eq!(id, RecordId::new(5));
    }

    #[test]
    fn seeded_store_holds_the_demo_row() {
        let store = RecordStore::seeded();

        assert_eq!(store.len(), 1);
        let record = &store.records()[0];
        assert_eq!(record.id, RecordId::new(1));
        assert_eq!(record.get(FIELD_NAME), Some(&Value::text("Vedang")));
    }

    #[test]
    fn events_fire_in_mutation_order_and_skip_noops() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = RecordStore::new();
        store.attach_sink(Box::new(RecordingSink(Rc::clone(&events))));

        let id = store.create(values("a"));
        store.update(id, values("b"));
        store.delete(RecordId::new(99));
        store.delete(id);
        store.replace_all(Vec::new());

        assert_eq!(
            events.borrow().as_slice(),
            &[
                StoreEvent::Created { id },
                StoreEvent::Updated { id },
                StoreEvent::Deleted { id },
                StoreEvent::Replaced { len: 0 },
            ]
        );
    }
}
