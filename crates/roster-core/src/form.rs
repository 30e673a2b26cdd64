use crate::{
    field::{FieldDescriptor, FieldKind},
    value::Value,
};

///
/// Control
///
/// Renderable state of one editable control: the widget shape, its option
/// list where one applies, and the current entry/selection. Binding
/// tolerates an absent or shape-mismatched stored value by falling back to
/// the empty/unselected state.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Control {
    TextInput {
        value: String,
    },
    TextArea {
        value: String,
    },
    CheckboxGroup {
        options: Vec<String>,
        selected: Vec<String>,
    },
    RadioGroup {
        options: Vec<String>,
        selected: Option<String>,
    },
    Select {
        options: Vec<String>,
        selected: Option<String>,
    },
}

impl Control {
    /// Bind a descriptor and the current stored value to a control.
    /// Selections that are not in the option list are dropped, the way a
    /// browser drops a stale value it cannot show.
    #[must_use]
    pub fn bind(descriptor: &FieldDescriptor, value: Option<&Value>) -> Self {
        match descriptor.kind {
            FieldKind::Text => Self::TextInput {
                value: text_of(value),
            },
            FieldKind::Textarea => Self::TextArea {
                value: text_of(value),
            },
            FieldKind::Checkbox => Self::CheckboxGroup {
                options: descriptor.options.clone(),
                selected: list_of(value)
                    .into_iter()
                    .filter(|item| descriptor.options.contains(item))
                    .collect(),
            },
            FieldKind::Radio => Self::RadioGroup {
                options: descriptor.options.clone(),
                selected: choice_of(value, &descriptor.options),
            },
            FieldKind::Select => Self::Select {
                options: descriptor.options.clone(),
                selected: choice_of(value, &descriptor.options),
            },
        }
    }

    /// Value to store for the current state; None when nothing is entered,
    /// so untouched controls never land in the submitted map.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        match self {
            Self::TextInput { value } | Self::TextArea { value } => {
                (!value.is_empty()).then(|| Value::text(value.clone()))
            }
            Self::CheckboxGroup { selected, .. } => {
                (!selected.is_empty()).then(|| Value::List(selected.clone()))
            }
            Self::RadioGroup { selected, .. } | Self::Select { selected, .. } => {
                selected.clone().map(Value::Text)
            }
        }
    }
}

fn text_of(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_text)
        .map(ToOwned::to_owned)
        .unwrap_or_default()
}

fn list_of(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_list)
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}

fn choice_of(value: Option<&Value>, options: &[String]) -> Option<String> {
    value
        .and_then(Value::as_text)
        .filter(|text| options.iter().any(|opt| opt == text))
        .map(ToOwned::to_owned)
}
