use std::fmt;

/// Knobs for a generation run.
#[derive(Clone, Debug)]
pub struct Options {
    /// Name written in the `Code generated by` banner.
    pub tool_name: String,
    pub result_cast: ResultCast,
}

impl Options {
    pub fn tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }

    pub fn result_cast(mut self, cast: ResultCast) -> Self {
        self.result_cast = cast;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            tool_name: "mocktail".to_owned(),
            result_cast: ResultCast::default(),
        }
    }
}

/// How a mocked method reads a result that has no narrow accessor.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum ResultCast {
    /// `v, _ := _ret.Get(i).(T)`: a mismatched return value becomes
    /// the zero value of `T` and shows up as a wrong value in the test.
    Permissive,
    /// `v := _ret.Get(i).(T)`: a mismatched return value panics.
    Strict,
}

impl Default for ResultCast {
    fn default() -> Self {
        ResultCast::Permissive
    }
}

impl fmt::Display for ResultCast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ResultCast::Permissive => "permissive",
            ResultCast::Strict => "strict",
        })
    }
}
