/// The text field the user types into
pub trait ChatInput {
    fn clear(&self);
    fn focus(&self);
}

/// The send button
pub trait SendControl {
    fn set_enabled(&self, enabled: bool);
    fn set_label(&self, label: &str);
}
