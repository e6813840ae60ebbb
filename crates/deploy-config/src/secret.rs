use {
    serde::Serialize,
    std::fmt,
};

/// A credential that must never end up in logs.
///
/// `Debug` and `Display` print "SECRET". Serializing writes the real value
/// because the assembled configuration is handed to the deployment toolchain
/// verbatim.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SECRET")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SECRET")
    }
}

impl std::str::FromStr for Secret {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_hides_value() {
        let secret = Secret::new("0xdeadbeef");
        assert_eq!(format!("{secret}"), "SECRET");
        assert_eq!(format!("{secret:?}"), "SECRET");
        assert_eq!(format!("{:?}", Some(&secret)), "Some(SECRET)");
        assert_eq!(secret.expose(), "0xdeadbeef");
    }

    #[test]
    fn serializes_real_value() {
        let secret = Secret::new("key");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"key\"");
    }
}
