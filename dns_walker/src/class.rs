#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Class {
    #[default]
    In,
    Unknown(u16),
}

impl From<u16> for Class {
    fn from(value: u16) -> Self {
        match value {
            1 => Class::In,
            other => Class::Unknown(other),
        }
    }
}

impl From<Class> for u16 {
    fn from(value: Class) -> Self {
        match value {
            Class::In => 1,
            Class::Unknown(code) => code,
        }
    }
}
