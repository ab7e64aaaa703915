use std::sync::LazyLock;

mod macros;

/// Version string reported by the CLI and in outgoing `User-Agent` headers.
pub const fn crafters_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = crafters_version();

    format!("AI Crafters Backend ({homepage}, {repository}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
    assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
};

pub trait Apply {
    /// Passes `self` through `f`, useful for chaining free functions.
    fn apply(self, f: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        f(self)
    }

    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use crafters_utils::Apply;
    /// fn with_suffix(s: String, suffix: Option<&str>) -> String {
    ///     s.apply_map(suffix, |s, suffix| s + suffix)
    /// }
    /// assert_eq!(with_suffix("a".into(), None), "a");
    /// assert_eq!(with_suffix("a".into(), Some("b")), "ab");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    /// Applies the function `f` only if `condition` is true.
    fn apply_if(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        if condition {
            f(self)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
