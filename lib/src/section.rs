use crate::types::UnitValue;

/// One catalog entry of a section: the key written to the unit file and the
/// accessor producing its text.
pub struct Field<S> {
    pub key: &'static str,
    pub value: fn(&S) -> Option<String>,
}

/// A `[Header]` block of a unit file with a fixed, ordered field catalog.
pub trait Section: Sized + 'static {
    const HEADER: &'static str;
    const FIELDS: &'static [Field<Self>];

    fn keys() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|f| f.key)
    }
}

/// Conversion of a stored field into unit-file text. `None` means unset.
pub trait FieldValue {
    fn to_field(&self) -> Option<String>;
}

impl FieldValue for Option<String> {
    fn to_field(&self) -> Option<String> {
        self.clone()
    }
}

impl FieldValue for Option<u32> {
    fn to_field(&self) -> Option<String> {
        self.map(|n| n.to_string())
    }
}

impl<T: UnitValue> FieldValue for Option<T> {
    fn to_field(&self) -> Option<String> {
        self.map(|v| v.as_str().to_string())
    }
}

/// Declares a section struct together with its catalog. Fields are listed in
/// output order as `field: Type => "Key"`.
macro_rules! section {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $header:literal {
            $( $(#[$fmeta:meta])* $field:ident: $ty:ty => $key:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $crate::section::Section for $name {
            const HEADER: &'static str = $header;
            const FIELDS: &'static [$crate::section::Field<Self>] = &[
                $(
                    $crate::section::Field {
                        key: $key,
                        value: |s: &$name| $crate::section::FieldValue::to_field(&s.$field),
                    },
                )*
            ];
        }
    };
}

pub(crate) use section;
