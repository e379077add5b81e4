//! Fixed-shape records and opaque nominal types.
//!
//! Each shape is a named struct with every field required, and each marker
//! type is its own unit struct. Misusing them is a compile error rather than
//! a silent `nil` at runtime. The `compile_fail` examples below pin down the
//! three misuses the lesson script used to get away with.

use std::fmt;
use std::io::{self, Write};

use primer_foundation::{Type, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A class and the professor who teaches it.
///
/// Both fields are required. Leaving one out does not compile:
///
/// ```compile_fail
/// use primer_lessons::records::{ClassInfo, add_class};
///
/// let biology = ClassInfo {
///     class_name: "Biology".to_string(),
/// };
/// add_class(&biology);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct ClassInfo {
    /// Name of the class.
    pub class_name: String,
    /// Name of the professor teaching it.
    pub professor_name: String,
}

impl ClassInfo {
    /// Type descriptor used in diagnostics.
    pub const TYPE: Type = Type::Record("ClassInfo");

    /// Creates a class record.
    #[must_use]
    pub fn new(class_name: impl Into<String>, professor_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            professor_name: professor_name.into(),
        }
    }
}

/// A person with a name and an age.
///
/// There is no `nam` field; reading it does not compile:
///
/// ```compile_fail
/// use primer_lessons::records::Person;
///
/// fn print_name(person: &Person) {
///     println!("{}", person.nam);
/// }
/// print_name(&Person::new("Ada", 36));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl Person {
    /// Type descriptor used in diagnostics.
    pub const TYPE: Type = Type::Record("Person");

    /// Creates a person.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// A named build profile with an optimization level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct BuildProfile {
    /// Profile name, e.g. `"release"`.
    pub profile: String,
    /// Optimization level, 0 through 3.
    pub optimization_level: u8,
}

impl BuildProfile {
    /// Type descriptor used in diagnostics.
    pub const TYPE: Type = Type::Record("BuildProfile");
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (opt-level {})", self.profile, self.optimization_level)
    }
}

/// Marker type with no data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MyClass;

impl MyClass {
    /// Type descriptor used in diagnostics.
    pub const TYPE: Type = Type::Opaque("MyClass");
}

impl From<MyClass> for Value {
    fn from(_: MyClass) -> Self {
        Value::Opaque("MyClass")
    }
}

/// Configuration for the person API. Carries no data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApiConfig;

impl ApiConfig {
    /// Type descriptor used in diagnostics.
    pub const TYPE: Type = Type::Opaque("ApiConfig");
}

/// Configuration for AWS access. Carries no data, and is not an
/// [`ApiConfig`]:
///
/// ```compile_fail
/// use primer_lessons::records::{AwsConfig, get_person_id};
///
/// let config_a = AwsConfig;
/// get_person_id(&config_a);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AwsConfig;

impl AwsConfig {
    /// Type descriptor used in diagnostics.
    pub const TYPE: Type = Type::Opaque("AwsConfig");
}

/// Identifier of a person in the person API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "person#{}", self.0)
    }
}

/// Describes a class as `"<class> taught by <professor>"`.
#[must_use]
pub fn add_class(class: &ClassInfo) -> String {
    tracing::debug!(class = %class.class_name, "adding class");
    format!("{} taught by {}", class.class_name, class.professor_name)
}

/// Writes the person's name followed by a newline.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn print_name<W: Write + ?Sized>(person: &Person, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", person.name)
}

/// Looks up the current person's id through the person API.
///
/// There is no service behind [`ApiConfig`], so the lookup never resolves.
#[must_use]
pub fn get_person_id(config: &ApiConfig) -> Option<PersonId> {
    tracing::debug!(?config, "person lookup has no backing service");
    None
}
