use codec::{Decode, Encode, MaxEncodedLen};
use permissioning_primitives::{
	Authority, BlockSigningAuthority, Name, PermissionLevel, PermissionLevelWeight,
};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	Eq,
	PartialEq,
	RuntimeDebug,
	TypeInfo,
	MaxEncodedLen,
	Serialize,
	Deserialize,
)]
pub enum EntityKind {
	Partner,
	NonPartner,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Entity {
	pub name: Name,
	pub kind: EntityKind,
	/// Maintained by the entity itself.
	pub info: Vec<u8>,
	/// Maintained by the committee.
	pub ext_info: Vec<u8>,
}

impl Entity {
	pub fn new(name: Name, kind: EntityKind) -> Self {
		Self { name, kind, info: Vec::new(), ext_info: Vec::new() }
	}
}

#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum NodeKind {
	Validator,
	Writer,
	Boot,
	Observer,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Node {
	pub name: Name,
	/// Owning entity
	pub entity: Name,
	pub kind: NodeKind,
	/// Only validators carry one.
	pub signing_authority: Option<BlockSigningAuthority>,
	pub enabled: bool,
	pub info: Vec<u8>,
	pub ext_info: Vec<u8>,
	/// Free-form group labels, not checked against `NetGroups`.
	pub net_groups: Vec<Name>,
}

#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum LinkDirection {
	AToB,
	BToA,
	Both,
}

impl LinkDirection {
	/// The same direction seen with the endpoints swapped.
	pub fn reversed(self) -> Self {
		match self {
			LinkDirection::AToB => LinkDirection::BToA,
			LinkDirection::BToA => LinkDirection::AToB,
			LinkDirection::Both => LinkDirection::Both,
		}
	}
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct NetLink {
	pub id: u64,
	pub node_a: Name,
	pub node_b: Name,
	/// Relative to `node_a` -> `node_b`.
	pub direction: LinkDirection,
}

/// Order-independent key of an undirected node pair.
pub fn pair_key(a: Name, b: Name) -> u128 {
	let (high, low) = if a.0 >= b.0 { (a.0, b.0) } else { (b.0, a.0) };
	(u128::from(high) << 64) | u128::from(low)
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct NetGroup {
	pub name: Name,
	pub nodes: Vec<Name>,
}

/// Whether a writer record mutation actually changed the delegate set.
#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum RecordChange {
	Changed,
	Unchanged,
}

impl RecordChange {
	pub fn is_changed(self) -> bool {
		self == RecordChange::Changed
	}
}

/// Delegates of one `writer` capability, sorted by permission level.
#[derive(Clone, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct WriterAuthorityRecord {
	pub writers: Vec<PermissionLevelWeight>,
}

impl WriterAuthorityRecord {
	pub fn insert(&mut self, delegate: PermissionLevel, weight: u16) -> RecordChange {
		match self.writers.binary_search_by(|w| w.permission.cmp(&delegate)) {
			Ok(_) => RecordChange::Unchanged,
			Err(pos) => {
				self.writers.insert(pos, PermissionLevelWeight { permission: delegate, weight });
				RecordChange::Changed
			},
		}
	}

	pub fn remove(&mut self, delegate: &PermissionLevel) -> RecordChange {
		match self.writers.binary_search_by(|w| w.permission.cmp(delegate)) {
			Ok(pos) => {
				self.writers.remove(pos);
				RecordChange::Changed
			},
			Err(_) => RecordChange::Unchanged,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.writers.is_empty()
	}

	pub fn len(&self) -> usize {
		self.writers.len()
	}

	/// Threshold-one authority any single delegate satisfies.
	pub fn to_authority(&self) -> Authority {
		Authority::from_delegates(self.writers.clone())
	}
}

/// Host-side resource limits of an account. Negative values mean unmetered.
#[derive(
	Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct ResourceLimits {
	pub ram_bytes: i64,
	pub net_weight: i64,
	pub cpu_weight: i64,
}

impl ResourceLimits {
	pub fn is_ram_metered(&self) -> bool {
		self.ram_bytes >= 0
	}
}

/// Hash identifying a protocol feature.
pub type FeatureDigest = [u8; 32];

/// Chain-wide limits the host enforces on blocks and transactions.
#[derive(
	Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct ChainParameters {
	pub max_block_net_usage: u64,
	pub target_block_net_usage_pct: u32,
	pub max_transaction_net_usage: u32,
	pub base_per_transaction_net_usage: u32,
	pub net_usage_leeway: u32,
	pub context_free_discount_net_usage_num: u32,
	pub context_free_discount_net_usage_den: u32,
	pub max_block_cpu_usage: u32,
	pub target_block_cpu_usage_pct: u32,
	pub max_transaction_cpu_usage: u32,
	pub min_transaction_cpu_usage: u32,
	pub max_transaction_lifetime: u32,
	pub deferred_trx_expiration_window: u32,
	pub max_transaction_delay: u32,
	pub max_inline_action_size: u32,
	pub max_inline_action_depth: u16,
	pub max_authority_depth: u16,
}
