//! The unit under test and how its name resolves to a type.
//!
//! Every test case names the unit it validates, either directly as a type or by
//! name. Before any sub-test runs, the runner makes sure a named unit actually
//! exists by asking a [`UnitResolver`].
//!
//! Units can be registered globally with [`register_unit!`](crate::register_unit),
//! which places them in the [`UNITS`] distributed slice that [`LinkedUnits`]
//! searches. A [`UnitRegistry`] is the explicit alternative.

use std::{
    any::TypeId,
    borrow::Cow,
    collections::BTreeMap,
    fmt::{self, Debug},
};

use crate::util::short_name_of;

/// A type that is the subject of a test case.
#[derive(Clone, Copy)]
pub struct UnitType {
    name: &'static str,
    type_name: fn() -> &'static str,
    type_id: fn() -> TypeId,
}

impl UnitType {
    /// Describe `T` under the given name.
    ///
    /// This is `const` so it can be used to initialize statics, see
    /// [`register_unit!`](crate::register_unit).
    pub const fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            type_name: std::any::type_name::<T>,
            type_id: TypeId::of::<T>,
        }
    }

    /// Describe `T` under its short type name.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::named::<T>(short_name_of::<T>())
    }

    /// The name this unit resolves under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The full path of the described type.
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }
}

impl PartialEq for UnitType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for UnitType {}

impl Debug for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitType")
            .field("name", &self.name)
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// How a test case refers to its unit under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// The unit type is known directly, no resolution needed.
    Type(UnitType),

    /// Only the unit name is known, it has to be resolved before running.
    Named(Cow<'static, str>),
}

impl Unit {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(UnitType::of::<T>())
    }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Unit::Type(unit_type) => Cow::Borrowed(unit_type.name()),
            Unit::Named(name) => name.clone(),
        }
    }

    pub fn unit_type(&self) -> Option<UnitType> {
        match self {
            Unit::Type(unit_type) => Some(*unit_type),
            Unit::Named(_) => None,
        }
    }
}

impl From<UnitType> for Unit {
    fn from(value: UnitType) -> Self {
        Self::Type(value)
    }
}

impl From<&'static str> for Unit {
    fn from(value: &'static str) -> Self {
        Self::Named(value.into())
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Self::Named(value.into())
    }
}

/// Resolves unit names to unit types.
pub trait UnitResolver {
    fn resolve(&self, name: &str) -> Option<UnitType>;
}

impl<F> UnitResolver for F
where
    F: Fn(&str) -> Option<UnitType>,
{
    fn resolve(&self, name: &str) -> Option<UnitType> {
        self(name)
    }
}

#[linkme::distributed_slice]
pub static UNITS: [UnitType];

/// Resolves names against every unit registered with
/// [`register_unit!`](crate::register_unit).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkedUnits;

impl UnitResolver for LinkedUnits {
    fn resolve(&self, name: &str) -> Option<UnitType> {
        UNITS.iter().find(|unit| unit.name() == name).copied()
    }
}

/// An explicit name to type table.
#[derive(Debug, Default, Clone)]
pub struct UnitRegistry {
    units: BTreeMap<Cow<'static, str>, UnitType>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit<T: ?Sized + 'static>(mut self) -> Self {
        self.insert(UnitType::of::<T>());
        self
    }

    pub fn with_named_unit<T: ?Sized + 'static>(mut self, name: &'static str) -> Self {
        self.insert(UnitType::named::<T>(name));
        self
    }

    pub fn insert(&mut self, unit: UnitType) -> Option<UnitType> {
        self.units.insert(Cow::Borrowed(unit.name()), unit)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl UnitResolver for UnitRegistry {
    fn resolve(&self, name: &str) -> Option<UnitType> {
        self.units.get(name).copied()
    }
}

/// Register a unit type in [`UNITS`] so [`LinkedUnits`] can resolve it by name.
///
/// ```ignore
/// struct Rectangle;
/// unitcase::register_unit!(Rectangle);
/// unitcase::register_unit!("Square" => shapes::Square);
/// ```
#[macro_export]
macro_rules! register_unit {
    ($unit:ident) => {
        $crate::register_unit!(::std::stringify!($unit) => $unit);
    };

    ($name:expr => $unit:ty) => {
        const _: () = {
            #[$crate::__private::linkme::distributed_slice($crate::unit::UNITS)]
            #[linkme(crate = $crate::__private::linkme)]
            static UNIT: $crate::unit::UnitType = $crate::unit::UnitType::named::<$unit>($name);
        };
    };
}
