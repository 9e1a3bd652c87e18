//! Macro for defining typed identifier value objects.

/// Defines a value object for one [`DocumentKind`](crate::DocumentKind).
///
/// This generates a newtype over the shared document core with:
/// - A `KIND` constant
/// - `new()` / `new_with_policy()` that fail on invalid input
/// - `try_create()` / `try_parse()` that never fail
/// - `check_digits()` for computing check digits of a bare base
/// - `Display`, `FromStr`, `AsRef<str>` and `String` conversions
/// - `Serialize` (formatted) and `Deserialize` (validated)
/// - `Eq`, `Ord` and `Hash` over the canonical form
/// - An implementation of [`Document`](crate::Document)
///
/// # Example
///
/// ```ignore
/// define_document!(Cpf, DocumentKind::Cpf);
///
/// let cpf = Cpf::new("123.456.789-09")?;
/// let parsed: Cpf = "12345678909".parse()?;
/// assert_eq!(cpf, parsed);
/// ```
macro_rules! define_document {
    ($name:ident, $kind:expr) => {
        /// A validated identifier of this kind.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::document::DocumentCore);

        impl $name {
            /// The kind of identifier this type holds.
            pub const KIND: $crate::DocumentKind = $kind;

            /// Creates a value from raw input, failing unless it validates.
            ///
            /// Lower-case letters are rejected; see [`Self::new_with_policy`].
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::InvalidDocumentError> {
                Self::new_with_policy(value, $crate::CasePolicy::Strict)
            }

            /// Creates a value from raw input under an explicit case policy.
            pub fn new_with_policy(
                value: impl Into<String>,
                policy: $crate::CasePolicy,
            ) -> Result<Self, $crate::InvalidDocumentError> {
                $crate::document::DocumentCore::checked(Self::KIND, value.into(), policy).map(Self)
            }

            /// Creates a value, or returns `None` for absent, blank or invalid input.
            #[must_use]
            pub fn try_create(value: Option<&str>) -> Option<Self> {
                Self::try_create_with_policy(value, $crate::CasePolicy::Strict)
            }

            /// Like [`Self::try_create`] under an explicit case policy.
            #[must_use]
            pub fn try_create_with_policy(
                value: Option<&str>,
                policy: $crate::CasePolicy,
            ) -> Option<Self> {
                let value = value.filter(|v| !v.trim().is_empty())?;
                Self::new_with_policy(value, policy).ok()
            }

            /// Parses into `out`, returning whether parsing succeeded.
            ///
            /// `out` is set to `None` on failure.
            pub fn try_parse(value: Option<&str>, out: &mut Option<Self>) -> bool {
                *out = Self::try_create(value);
                out.is_some()
            }

            /// Computes the two check digits for a bare base of this kind.
            pub fn check_digits(base: &str) -> Result<String, $crate::InvalidDocumentError> {
                Self::KIND.check_digits(base)
            }

            /// Formatted value of `doc`, or an empty string when absent.
            #[must_use]
            pub fn display_or_empty(doc: Option<&Self>) -> String {
                doc.map(Self::formatted_value).unwrap_or_default()
            }

            /// The kind of identifier this value holds.
            #[must_use]
            pub fn kind(&self) -> $crate::DocumentKind {
                self.0.kind()
            }

            /// The raw input exactly as supplied.
            #[must_use]
            pub fn value(&self) -> &str {
                self.0.value()
            }

            /// The canonical form: letters and digits only, upper-cased.
            #[must_use]
            pub fn unformatted_value(&self) -> &str {
                self.0.unformatted_value()
            }

            /// The canonical form with its separators inserted.
            #[must_use]
            pub fn formatted_value(&self) -> String {
                self.0.formatted_value()
            }

            /// Always true for a constructed value.
            #[must_use]
            pub fn is_valid(&self) -> bool {
                self.0.is_valid()
            }
        }

        impl $crate::Document for $name {
            fn kind(&self) -> $crate::DocumentKind {
                self.0.kind()
            }

            fn value(&self) -> &str {
                self.0.value()
            }

            fn unformatted_value(&self) -> &str {
                self.0.unformatted_value()
            }

            fn formatted_value(&self) -> String {
                self.0.formatted_value()
            }

            fn is_valid(&self) -> bool {
                self.0.is_valid()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted_value())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::InvalidDocumentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::InvalidDocumentError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::InvalidDocumentError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<&$name> for String {
            fn from(doc: &$name) -> Self {
                doc.formatted_value()
            }
        }

        impl From<$name> for String {
            fn from(doc: $name) -> Self {
                doc.formatted_value()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.value()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.formatted_value())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_document;
