/// Declares a backend-assigned numeric id. Serialized as the bare number.
// Must stay above the `mod` declarations so the submodules see it.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

pub mod command;
pub mod dispatch;
pub mod server;

pub use command::{Command, CommandId};
pub use dispatch::{CommandPayload, DispatchReceipt, MessagePayload};
pub use server::{Player, PlayerId, Server, ServerId};
