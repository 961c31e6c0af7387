/// A transient message shown to the user after an action completed or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: Kind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            kind: Kind::Success,
            title: String::from("Success"),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: Kind::Error,
            title: String::from("Error"),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_notification() {
        assert_eq!(
            Notification::success("Program saved successfully"),
            Notification {
                kind: Kind::Success,
                title: String::from("Success"),
                description: String::from("Program saved successfully"),
            }
        );
        assert_eq!(
            Notification::error("Failed to save program"),
            Notification {
                kind: Kind::Error,
                title: String::from("Error"),
                description: String::from("Failed to save program"),
            }
        );
    }
}
