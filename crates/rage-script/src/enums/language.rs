/// UI language codes reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Language {
    American = 0,
    French = 1,
    German = 2,
    Italian = 3,
    Spanish = 4,
    Portuguese = 5,
    Polish = 6,
    Russian = 7,
    Korean = 8,
    Chinese = 9,
    Japanese = 10,
    Mexican = 11,
    ChineseSimplified = 12,
}

impl Language {
    /// Total number of language codes.
    pub const COUNT: usize = 13;

    /// Convert a raw host code to a Language.
    /// Returns None if the value is out of range.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::American),
            1 => Some(Self::French),
            2 => Some(Self::German),
            3 => Some(Self::Italian),
            4 => Some(Self::Spanish),
            5 => Some(Self::Portuguese),
            6 => Some(Self::Polish),
            7 => Some(Self::Russian),
            8 => Some(Self::Korean),
            9 => Some(Self::Chinese),
            10 => Some(Self::Japanese),
            11 => Some(Self::Mexican),
            12 => Some(Self::ChineseSimplified),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}
