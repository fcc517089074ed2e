use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Lenient parse for values coming from inline handlers; unknown is success.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("error") {
            ToastKind::Error
        } else {
            ToastKind::Success
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient notification shown in the shared `#toast` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// Class attribute while the toast is on screen.
    pub fn shown_class(&self) -> String {
        format!("toast {} show", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_class_carries_kind() {
        assert_eq!(Toast::success("ok").shown_class(), "toast success show");
        assert_eq!(Toast::error("no").shown_class(), "toast error show");
    }

    #[test]
    fn kind_parse_defaults_to_success() {
        assert_eq!(ToastKind::from_name("error"), ToastKind::Error);
        assert_eq!(ToastKind::from_name("ERROR"), ToastKind::Error);
        assert_eq!(ToastKind::from_name(""), ToastKind::Success);
        assert_eq!(ToastKind::from_name("warning"), ToastKind::Success);
    }
}
