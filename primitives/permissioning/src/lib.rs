//! Value types shared by the permissioning pallet and the runtime that hosts it.

#![cfg_attr(not(feature = "std"), no_std)]

mod authority;
mod name;

pub use authority::*;
pub use name::{Name, NameError, MAX_NAME_LEN};

/// Compressed secp256k1 public key.
pub type PublicKey = sp_core::ecdsa::Public;

/// Permission names the engine reads or writes.
pub mod permissions {
	use super::Name;

	pub const OWNER: Name = Name::from_static("owner");
	pub const ACTIVE: Name = Name::from_static("active");
	/// Per-entity aggregate over the entity's writer nodes.
	pub const WRITER: Name = Name::from_static("writer");
	/// Global aggregate (on the writer account) over every writer entity.
	pub const ACCESS: Name = Name::from_static("access");
}

/// Action names linked to an entity's writer permission.
pub mod actions {
	use super::Name;

	pub const NEW_ACCOUNT: Name = Name::from_static("newaccount");
	pub const SET_RAM: Name = Name::from_static("setram");
	pub const RUN: Name = Name::from_static("run");
}
