/// Player identity provided by authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

pub trait Authenticator {
    fn current_user(&self) -> Option<User>;

    fn has_session(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Visitor without session, always plays demo farm.
pub struct Anonymous;

impl Authenticator for Anonymous {
    fn current_user(&self) -> Option<User> {
        None
    }

    fn has_session(&self) -> bool {
        false
    }
}
