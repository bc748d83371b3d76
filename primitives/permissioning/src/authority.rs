use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::{prelude::*, vec};

use crate::{Name, PublicKey};

/// `actor@permission`, e.g. `banka@writer`.
///
/// Ordered by actor first, then permission, which is the order writer
/// records keep their delegates in.
#[derive(
	Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode, MaxEncodedLen, RuntimeDebug, TypeInfo,
)]
pub struct PermissionLevel {
	pub actor: Name,
	pub permission: Name,
}

impl PermissionLevel {
	pub const fn new(actor: Name, permission: Name) -> Self {
		Self { actor, permission }
	}
}

#[derive(
	Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode, MaxEncodedLen, RuntimeDebug, TypeInfo,
)]
pub struct PermissionLevelWeight {
	pub permission: PermissionLevel,
	pub weight: u16,
}

#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, RuntimeDebug, TypeInfo)]
pub struct KeyWeight {
	pub key: PublicKey,
	pub weight: u16,
}

#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, RuntimeDebug, TypeInfo)]
pub struct WaitWeight {
	pub wait_sec: u32,
	pub weight: u16,
}

/// Weighted-threshold authority over keys, delegated permissions and delays.
#[derive(Clone, Default, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct Authority {
	pub threshold: u32,
	pub keys: Vec<KeyWeight>,
	pub accounts: Vec<PermissionLevelWeight>,
	pub waits: Vec<WaitWeight>,
}

impl Authority {
	/// Threshold one, satisfied by `key` alone.
	pub fn single_key(key: PublicKey) -> Self {
		Self { threshold: 1, keys: vec![KeyWeight { key, weight: 1 }], ..Default::default() }
	}

	/// Threshold one, satisfied by `permission` alone.
	pub fn delegated(permission: PermissionLevel) -> Self {
		Self::from_delegates(vec![PermissionLevelWeight { permission, weight: 1 }])
	}

	/// Threshold one over an already sorted delegate list.
	pub fn from_delegates(accounts: Vec<PermissionLevelWeight>) -> Self {
		Self { threshold: 1, accounts, ..Default::default() }
	}
}

/// Block signing authority of a validator.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct BlockSigningAuthority {
	pub threshold: u32,
	pub keys: Vec<KeyWeight>,
}

impl BlockSigningAuthority {
	pub fn single_key(key: PublicKey) -> Self {
		Self { threshold: 1, keys: vec![KeyWeight { key, weight: 1 }] }
	}

	/// First configured key, the one a schedule entry is built from.
	pub fn primary_key(&self) -> Option<&PublicKey> {
		self.keys.first().map(|k| &k.key)
	}
}

/// One entry of a proposed producer schedule.
#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, RuntimeDebug, TypeInfo)]
pub struct ProducerKey {
	pub producer_name: Name,
	pub block_signing_key: PublicKey,
}
