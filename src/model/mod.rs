pub mod scalar;
pub mod spec;

pub use scalar::ScalarType;
pub use spec::{
    CustomField, CustomMapField, Enum, EnumValue, Field, MapField, Message, Reserved,
    ScalarField, Spec,
};
