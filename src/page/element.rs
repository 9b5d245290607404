use std::collections::BTreeMap;

/// Id of the button that begins a session
pub const START_BUTTON_ID: &str = "start-working-button";

/// Id of the button(s) that end a session
pub const STOP_BUTTON_ID: &str = "stop-working-button";

/// Data attribute carrying the task a stop button belongs to (`data-task-id`)
pub const TASK_ID_ATTR: &str = "task-id";

/// The slice of a DOM element the recorder looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: Option<String>,

    /// `data-*` attributes, keyed without the `data-` prefix
    pub data: BTreeMap<String, String>,
}

impl Element {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            data: BTreeMap::new(),
        }
    }

    pub fn start_button() -> Self {
        Self::with_id(START_BUTTON_ID)
    }

    /// A stop button for `task_id`
    pub fn stop_button(task_id: impl ToString) -> Self {
        Self::with_id(STOP_BUTTON_ID).data_attr(TASK_ID_ATTR, task_id)
    }

    pub fn data_attr(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.data.insert(key.into(), value.to_string());
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn task_id(&self) -> Option<&str> {
        self.data(TASK_ID_ATTR)
    }

    pub fn is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// A click delivered to one of the bound buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: Element,
}

impl ClickEvent {
    pub fn on(target: Element) -> Self {
        Self { target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_button_carries_task_id() {
        let button = Element::stop_button(42);

        assert!(button.is(STOP_BUTTON_ID));
        assert_eq!(button.task_id(), Some("42"));
    }

    #[test]
    fn test_element_without_task_id() {
        let button = Element::with_id(STOP_BUTTON_ID);

        assert_eq!(button.task_id(), None);
        assert!(!button.is(START_BUTTON_ID));
    }
}
