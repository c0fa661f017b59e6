use std::collections::HashMap;

/// Pupil name → group key, built from the roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    groups: HashMap<String, String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries for the same name replace earlier ones.
    pub fn insert(&mut self, name: impl Into<String>, group: impl Into<String>) {
        self.groups.insert(name.into(), group.into());
    }

    pub fn group_of(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<N: Into<String>, G: Into<String>> FromIterator<(N, G)> for Roster {
    fn from_iter<T: IntoIterator<Item = (N, G)>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for (name, group) in iter {
            roster.insert(name, group);
        }
        roster
    }
}
