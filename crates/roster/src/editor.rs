use crate::{
    error::{Error, SubmitError},
    session::{FormSession, SubmitOutcome},
};
use roster_core::{
    filter::filter,
    io::{FileMeta, PendingImport, export_json},
    obs::EventSink,
    record::{Record, RecordId},
    store::RecordStore,
};

///
/// Editor
///
/// The orchestrator a view layer drives: the record store, the optional
/// open form session, and the live search query. One method per UI event,
/// each completing synchronously before the next event is handled.
///

pub struct Editor {
    store: RecordStore,
    session: Option<FormSession>,
    query: String,
}

impl Editor {
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(RecordStore::new())
    }

    /// Editor over the demo row the table ships with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_store(RecordStore::seeded())
    }

    #[must_use]
    pub const fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            session: None,
            query: String::new(),
        }
    }

    pub fn attach_sink(&mut self, sink: Box<dyn EventSink>) {
        self.store.attach_sink(sink);
    }

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub const fn session(&self) -> Option<&FormSession> {
        self.session.as_ref()
    }

    pub const fn session_mut(&mut self) -> Option<&mut FormSession> {
        self.session.as_mut()
    }

    /// "Add Details": open a blank session. An already open session is
    /// replaced.
    pub fn open_add(&mut self) {
        self.session = Some(FormSession::add());
    }

    /// Edit action from a table row. Unknown ids are a no-op; the UI only
    /// dispatches ids from the current list.
    pub fn open_edit(&mut self, id: RecordId) {
        if let Some(record) = self.store.get(id) {
            self.session = Some(FormSession::edit(record));
        }
    }

    /// Cancel: drop the session, store untouched.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Submit the open session. On validation failure the session stays
    /// open and the store is untouched; on success the submitted values
    /// are created or merged and the session closes.
    pub fn submit(&mut self) -> Result<SubmitOutcome, Error> {
        let Some(session) = self.session.as_ref() else {
            return Err(SubmitError::Closed.into());
        };

        let issues = session.validate();
        if !issues.is_empty() {
            return Err(SubmitError::Invalid(issues).into());
        }

        let values = session.submitted_values();
        let outcome = match session.editing() {
            Some(id) => {
                self.store.update(id, values);
                SubmitOutcome::Updated(id)
            }
            None => SubmitOutcome::Created(self.store.create(values)),
        };
        self.session = None;

        Ok(outcome)
    }

    /// Delete action from a table row (the confirm dialog is chrome).
    pub fn delete(&mut self, id: RecordId) {
        self.store.delete(id);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The table view: the record list under the live search filter, in
    /// record order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Record> {
        filter(self.store.records(), &self.query)
    }

    /// The data.json payload for the save action.
    pub fn export(&self) -> Result<String, Error> {
        Ok(export_json(self.store.records())?)
    }

    /// Load action: both import phases back to back, for callers that
    /// already hold the file contents. Any failure leaves the store
    /// unchanged. Returns the number of records imported.
    pub fn import(&mut self, meta: FileMeta, bytes: &[u8]) -> Result<usize, Error> {
        let records = PendingImport::check(meta)?.complete(bytes)?;
        let len = records.len();
        self.store.replace_all(records);

        Ok(len)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
