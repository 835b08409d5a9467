#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DestinationLevel {
    Instance,
    Group(i64),
}

impl DestinationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::Group(_) => "group",
        }
    }

    pub fn group_id(&self) -> Option<i64> {
        match self {
            Self::Instance => None,
            Self::Group(id) => Some(*id),
        }
    }
}
