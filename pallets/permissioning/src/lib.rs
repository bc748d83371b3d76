//! # Permissioning Pallet
//!
//! ## Overview
//!
//! Governs membership of a permissioned network: which organizations
//! (entities) and nodes exist, the delegated authority each of them holds, how
//! nodes are wired together and which validators produce blocks.
//!
//! The pallet keeps the registries. Everything that touches accounts,
//! permissions or resource limits is requested from the runtime through
//! [`Config::Host`], in issue order, before the call returns. A failing request
//! aborts the call and discards every storage change made by it.
//!
//! ### Writer capability
//!
//! Every writer node `n` of entity `e` gets the permission `e@n`. The entity's
//! writer nodes are aggregated into `e@writer`, and every entity holding at
//! least one writer node is aggregated into the global `writer@access`. Both
//! aggregates are threshold-one authorities over sorted delegate lists.
//!
//! ## Interface
//!
//! ### Committee Functions
//!
//! - `add_entity` / `remove_entity` / `set_entity_ext_info`
//! - `set_node_ext_info`
//! - `add_net_link` / `remove_net_link`
//! - `create_group` / `remove_group` / `set_node_groups`
//! - `propose_schedule`
//! - `set_privileged` / `set_account_limits`
//! - `set_params` / `activate_feature`
//!
//! ### Entity Functions
//!
//! - `set_entity_info`
//! - `add_validator` / `add_writer` / `add_boot` / `add_observer`
//! - `remove_node` / `set_node_info`
//! - `set_ram`
//!
//! ### Account Functions
//!
//! - `set_abi`
//! - `require_auth` / `require_activated`
//!
//! The runtime also calls [`NewAccountHook::on_new_account`] on every account
//! it creates.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

use frame_support::pallet_prelude::*;
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use permissioning_primitives::{
	permissions, Authority, BlockSigningAuthority, Name, PermissionLevel, PublicKey,
};
use sp_runtime::traits::Convert;
use sp_std::prelude::*;

pub mod authority;
pub mod host;
pub mod types;

mod accounts;
mod resources;
mod schedule;
mod topology;
mod writers;

pub use authority::{AuthorityError, DelegatePolicy};
pub use host::{CommandBatch, HostCommand, NewAccountHook, PermissionHost};
pub use types::*;

#[cfg(test)]
mod mock;


pub mod weights;
pub use weights::WeightInfo;

pub const LOG_TARGET: &str = "runtime::permissioning";

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use sp_std::marker::PhantomData;

	#[pallet::pallet]
	#[pallet::without_storage_info]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Because this pallet emits events, it depends on the runtime's definition of an event.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Origin of the permissioning committee.
		type CommitteeOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		/// Runtime side of accounts, permissions and resource limits.
		type Host: PermissionHost;

		/// Name of the on-chain account behind a signer, if it has one.
		type AccountNames: Convert<Self::AccountId, Option<Name>>;

		/// Account that creates entity and validator accounts. Also the scope
		/// of the global writer record.
		#[pallet::constant]
		type SystemAccount: Get<Name>;

		/// Account holding the global `access` permission.
		#[pallet::constant]
		type WriterAccount: Get<Name>;

		/// Limits given to a new entity account.
		#[pallet::constant]
		type EntityResourceLimits: Get<ResourceLimits>;

		/// Limits given to a new validator account.
		#[pallet::constant]
		type ValidatorResourceLimits: Get<ResourceLimits>;

		/// Weight information for extrinsics in this pallet.
		type WeightInfo: WeightInfo;
	}

	#[pallet::storage]
	pub type Entities<T: Config> = StorageMap<_, Blake2_128Concat, Name, Entity>;

	#[pallet::storage]
	pub type Nodes<T: Config> = StorageMap<_, Blake2_128Concat, Name, Node>;

	/// Nodes owned by an entity.
	#[pallet::storage]
	pub type NodesByEntity<T: Config> =
		StorageDoubleMap<_, Blake2_128Concat, Name, Blake2_128Concat, Name, NodeKind>;

	#[pallet::storage]
	pub type NetLinks<T: Config> = StorageMap<_, Twox64Concat, u64, NetLink>;

	/// Link id by [`pair_key`] of its endpoints.
	#[pallet::storage]
	pub type NetLinkByPair<T: Config> = StorageMap<_, Blake2_128Concat, u128, u64>;

	#[pallet::storage]
	pub type NextNetLinkId<T: Config> = StorageValue<_, u64, ValueQuery>;

	#[pallet::storage]
	pub type NetGroups<T: Config> = StorageMap<_, Blake2_128Concat, Name, NetGroup>;

	/// Writer delegates per scope. The system account keys the global record,
	/// entity names key the per-entity records. Empty records are not stored.
	#[pallet::storage]
	pub type WriterRecords<T: Config> =
		StorageMap<_, Blake2_128Concat, Name, WriterAuthorityRecord>;

	/// blake2-256 of the last ABI published by an account.
	#[pallet::storage]
	pub type AbiHashes<T: Config> = StorageMap<_, Blake2_128Concat, Name, [u8; 32]>;

	#[pallet::genesis_config]
	#[derive(frame_support::DefaultNoBound)]
	pub struct GenesisConfig<T: Config> {
		/// Entities present from the first block. Their accounts are expected
		/// to exist in the host's genesis.
		pub entities: Vec<(Name, EntityKind)>,
		#[serde(skip)]
		pub _config: PhantomData<T>,
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			for (name, kind) in &self.entities {
				assert!(!Entities::<T>::contains_key(name), "duplicate genesis entity {}", name);
			assert!(!Pallet::<T>::is_reserved_name(*name), "reserved genesis entity name {}", name);
				Entities::<T>::insert(name, Entity::new(*name, *kind));
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// An entity has been registered
		EntityAdded { entity: Name, kind: EntityKind },
		/// An entity and everything it owned has been removed
		EntityRemoved { entity: Name, writers: Vec<Name>, validators: Vec<Name> },
		EntityInfoUpdated { entity: Name },
		EntityExtInfoUpdated { entity: Name },
		/// A node has been registered under an entity
		NodeAdded { node: Name, entity: Name, kind: NodeKind },
		NodeRemoved { node: Name, entity: Name, kind: NodeKind },
		NodeInfoUpdated { node: Name },
		NodeExtInfoUpdated { node: Name },
		/// The entity's first writer node made it a member of `writer@access`
		WriterCapabilityGranted { entity: Name },
		/// The entity no longer has writer nodes
		WriterCapabilityRevoked { entity: Name },
		NetLinkUpserted { id: u64, node_a: Name, node_b: Name, direction: LinkDirection },
		NetLinkRemoved { id: u64, node_a: Name, node_b: Name },
		NetGroupCreated { group: Name, nodes: Vec<Name> },
		NetGroupRemoved { group: Name },
		NodeGroupsSet { node: Name, groups: Vec<Name> },
		/// RAM moved from an entity to one of its users
		RamTransferred { entity: Name, account: Name, bytes: i64 },
		ScheduleProposed { producers: Vec<Name> },
		AbiHashSet { account: Name, hash: [u8; 32] },
		PrivilegeSet { account: Name, privileged: bool },
		AccountLimitsSet { account: Name, limits: ResourceLimits },
		ChainParametersSet { params: ChainParameters },
		/// The host will activate the feature in the next block
		FeatureActivationRequested { digest: FeatureDigest },
	}

	#[pallet::error]
	pub enum Error<T> {
		EntityNotFound,
		NodeNotFound,
		GroupNotFound,
		NetLinkNotFound,
		/// The host does not know the account
		AccountNotFound,
		EntityAlreadyExists,
		NodeAlreadyExists,
		GroupAlreadyExists,
		/// The signer is not the entity or account the call acts for
		Unauthorized,
		/// Authority weights cannot satisfy the required policy
		InvalidAuthority,
		/// Validator without a block signing key
		MissingSigningAuthority,
		/// Non-partner entities can only run writer nodes
		NodeKindNotAllowed,
		NotAValidator,
		InvalidRamAmount,
		InsufficientRam,
		/// One side of a RAM transfer is not metered
		UnmeteredAccount,
		/// RAM can only go to plain user accounts
		NotAUserAccount,
		/// Only writer nodes and writer entities create user accounts
		CreatorNotAllowed,
		/// The system account created an account that is neither an entity nor a validator
		UndeclaredAccount,
		/// Name is empty, reserved or already taken by another registry
		InvalidName,
		ArithmeticOverflow,
		EmptySchedule,
		/// Both ends of a link are the same node
		SelfLink,
		FeatureNotActivated,
	}

	impl<T> From<AuthorityError> for Error<T> {
		fn from(e: AuthorityError) -> Self {
			match e {
				AuthorityError::Overflow => Error::<T>::ArithmeticOverflow,
				_ => Error::<T>::InvalidAuthority,
			}
		}
	}

	#[pallet::call(weight(<T as Config>::WeightInfo))]
	impl<T: Config> Pallet<T> {
		/// Registers an entity and requests its account.
		///
		/// Without `bootstrap_key` the account is controlled by `system@active`.
		///
		/// Emits `EntityAdded` event when successful.
		#[pallet::call_index(0)]
		pub fn add_entity(
			origin: OriginFor<T>,
			name: Name,
			kind: EntityKind,
			bootstrap_key: Option<PublicKey>,
		) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			ensure!(!Entities::<T>::contains_key(name), Error::<T>::EntityAlreadyExists);
			ensure!(Self::is_free_name(name), Error::<T>::InvalidName);

			Entities::<T>::insert(name, Entity::new(name, kind));

			let system = T::SystemAccount::get();
			let control = match bootstrap_key {
				Some(key) => Authority::single_key(key),
				None => Authority::delegated(PermissionLevel::new(system, permissions::ACTIVE)),
			};
			let mut batch = CommandBatch::new();
			batch.push(HostCommand::NewAccount {
				creator: system,
				name,
				owner: control.clone(),
				active: control,
			});
			batch.execute::<T::Host>()?;

			log::info!(target: LOG_TARGET, "entity {} added as {:?}", name, kind);

			// Emit an event
			Self::deposit_event(Event::EntityAdded { entity: name, kind });

			Ok(())
		}

		/// Removes an entity together with its nodes, writer capability and
		/// every topology reference to those nodes.
		///
		/// Emits `EntityRemoved` event when successful.
		#[pallet::call_index(1)]
		pub fn remove_entity(origin: OriginFor<T>, name: Name) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			Entities::<T>::take(name).ok_or(Error::<T>::EntityNotFound)?;

			let owned: Vec<(Name, NodeKind)> = NodesByEntity::<T>::drain_prefix(name).collect();
			let mut writers = Vec::new();
			let mut validators = Vec::new();
			for (node, kind) in &owned {
				Nodes::<T>::remove(node);
				match kind {
					NodeKind::Writer => writers.push(*node),
					NodeKind::Validator => validators.push(*node),
					NodeKind::Boot | NodeKind::Observer => {},
				}
			}
			writers.sort();
			validators.sort();

			let removed: Vec<Name> = owned.iter().map(|(node, _)| *node).collect();
			Self::purge_topology(&removed);

			let mut batch = CommandBatch::new();
			if WriterRecords::<T>::take(name).is_some() {
				Self::revoke_writer_capability(name, &mut batch);
			}
			for writer in &writers {
				batch.push(HostCommand::DeleteAuth { account: name, permission: *writer });
			}
			batch.execute::<T::Host>()?;

			log::info!(
				target: LOG_TARGET,
				"entity {} removed with {} nodes",
				name,
				removed.len(),
			);

			Self::deposit_event(Event::EntityRemoved { entity: name, writers, validators });

			Ok(())
		}

		/// The entity updates its own description.
		#[pallet::call_index(2)]
		pub fn set_entity_info(origin: OriginFor<T>, entity: Name, info: Vec<u8>) -> DispatchResult {
			Self::ensure_signed_by(origin, entity)?;

			Entities::<T>::try_mutate(entity, |maybe| -> DispatchResult {
				let record = maybe.as_mut().ok_or(Error::<T>::EntityNotFound)?;
				record.info = info;
				Ok(())
			})?;

			Self::deposit_event(Event::EntityInfoUpdated { entity });
			Ok(())
		}

		#[pallet::call_index(3)]
		pub fn set_entity_ext_info(
			origin: OriginFor<T>,
			entity: Name,
			ext_info: Vec<u8>,
		) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			Entities::<T>::try_mutate(entity, |maybe| -> DispatchResult {
				let record = maybe.as_mut().ok_or(Error::<T>::EntityNotFound)?;
				record.ext_info = ext_info;
				Ok(())
			})?;

			Self::deposit_event(Event::EntityExtInfoUpdated { entity });
			Ok(())
		}

		/// Registers a validator node and requests its account, controlled by
		/// the owning entity's `owner` and `active` permissions.
		///
		/// Emits `NodeAdded` event when successful.
		#[pallet::call_index(4)]
		pub fn add_validator(
			origin: OriginFor<T>,
			entity: Name,
			name: Name,
			signing_authority: BlockSigningAuthority,
		) -> DispatchResult {
			Self::ensure_signed_by(origin, entity)?;

			ensure!(!signing_authority.keys.is_empty(), Error::<T>::MissingSigningAuthority);
			authority::ensure_signing_authority(&signing_authority).map_err(Error::<T>::from)?;

			Self::insert_node(entity, name, NodeKind::Validator, Some(signing_authority))?;

			let mut batch = CommandBatch::new();
			batch.push(HostCommand::NewAccount {
				creator: T::SystemAccount::get(),
				name,
				owner: Authority::delegated(PermissionLevel::new(entity, permissions::OWNER)),
				active: Authority::delegated(PermissionLevel::new(entity, permissions::ACTIVE)),
			});
			batch.execute::<T::Host>()?;

			Self::deposit_event(Event::NodeAdded { node: name, entity, kind: NodeKind::Validator });
			Ok(())
		}

		/// Registers a writer node holding `authority` as the permission
		/// `entity@name`, and folds it into the entity's writer capability.
		///
		/// Emits `NodeAdded` event when successful, preceded by
		/// `WriterCapabilityGranted` for the entity's first writer.
		#[pallet::call_index(5)]
		pub fn add_writer(
			origin: OriginFor<T>,
			entity: Name,
			name: Name,
			authority: Authority,
		) -> DispatchResult {
			Self::ensure_signed_by(origin, entity)?;

			Self::ensure_writer_authority(&authority)?;
			Self::insert_node(entity, name, NodeKind::Writer, None)?;

			let mut batch = CommandBatch::new();
			Self::register_writer(entity, name, authority, &mut batch);
			batch.execute::<T::Host>()?;

			Self::deposit_event(Event::NodeAdded { node: name, entity, kind: NodeKind::Writer });
			Ok(())
		}

		#[pallet::call_index(6)]
		pub fn add_boot(origin: OriginFor<T>, entity: Name, name: Name) -> DispatchResult {
			Self::ensure_signed_by(origin, entity)?;
			Self::insert_node(entity, name, NodeKind::Boot, None)?;

			Self::deposit_event(Event::NodeAdded { node: name, entity, kind: NodeKind::Boot });
			Ok(())
		}

		#[pallet::call_index(7)]
		pub fn add_observer(origin: OriginFor<T>, entity: Name, name: Name) -> DispatchResult {
			Self::ensure_signed_by(origin, entity)?;
			Self::insert_node(entity, name, NodeKind::Observer, None)?;

			Self::deposit_event(Event::NodeAdded { node: name, entity, kind: NodeKind::Observer });
			Ok(())
		}

		/// Removes a node. Writer nodes lose their permission and leave the
		/// entity's writer capability.
		///
		/// Emits `NodeRemoved` event when successful.
		#[pallet::call_index(8)]
		pub fn remove_node(origin: OriginFor<T>, name: Name) -> DispatchResult {
			let signer = Self::signer_name(origin)?;
			let node = Nodes::<T>::get(name).ok_or(Error::<T>::NodeNotFound)?;
			ensure!(signer == node.entity, Error::<T>::Unauthorized);

			Nodes::<T>::remove(name);
			NodesByEntity::<T>::remove(node.entity, name);

			let mut batch = CommandBatch::new();
			if node.kind == NodeKind::Writer {
				Self::deregister_writer(node.entity, name, &mut batch);
			}
			Self::purge_topology(&[name]);
			batch.execute::<T::Host>()?;

			log::info!(target: LOG_TARGET, "node {} of {} removed", name, node.entity);

			Self::deposit_event(Event::NodeRemoved { node: name, entity: node.entity, kind: node.kind });
			Ok(())
		}

		#[pallet::call_index(9)]
		pub fn set_node_info(origin: OriginFor<T>, node: Name, info: Vec<u8>) -> DispatchResult {
			let signer = Self::signer_name(origin)?;
			let entity = Nodes::<T>::get(node).ok_or(Error::<T>::NodeNotFound)?.entity;
			ensure!(signer == entity, Error::<T>::Unauthorized);

			Nodes::<T>::mutate(node, |maybe| {
				if let Some(record) = maybe {
					record.info = info;
				}
			});

			Self::deposit_event(Event::NodeInfoUpdated { node });
			Ok(())
		}

		#[pallet::call_index(10)]
		pub fn set_node_ext_info(
			origin: OriginFor<T>,
			node: Name,
			ext_info: Vec<u8>,
		) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			Nodes::<T>::try_mutate(node, |maybe| -> DispatchResult {
				let record = maybe.as_mut().ok_or(Error::<T>::NodeNotFound)?;
				record.ext_info = ext_info;
				Ok(())
			})?;

			Self::deposit_event(Event::NodeExtInfoUpdated { node });
			Ok(())
		}

		/// Creates the link between two nodes, or updates the direction of an
		/// existing one. `direction` is read relative to `node_a` -> `node_b`.
		#[pallet::call_index(11)]
		pub fn add_net_link(
			origin: OriginFor<T>,
			node_a: Name,
			node_b: Name,
			direction: LinkDirection,
		) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			let link = Self::upsert_link(node_a, node_b, direction)?;

			Self::deposit_event(Event::NetLinkUpserted {
				id: link.id,
				node_a: link.node_a,
				node_b: link.node_b,
				direction: link.direction,
			});
			Ok(())
		}

		#[pallet::call_index(12)]
		pub fn remove_net_link(origin: OriginFor<T>, node_a: Name, node_b: Name) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			let link = Self::remove_link(node_a, node_b)?;

			Self::deposit_event(Event::NetLinkRemoved {
				id: link.id,
				node_a: link.node_a,
				node_b: link.node_b,
			});
			Ok(())
		}

		#[pallet::call_index(13)]
		pub fn create_group(origin: OriginFor<T>, name: Name, nodes: Vec<Name>) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			Self::insert_group(name, nodes.clone())?;

			Self::deposit_event(Event::NetGroupCreated { group: name, nodes });
			Ok(())
		}

		#[pallet::call_index(14)]
		pub fn remove_group(origin: OriginFor<T>, name: Name) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			NetGroups::<T>::take(name).ok_or(Error::<T>::GroupNotFound)?;

			Self::deposit_event(Event::NetGroupRemoved { group: name });
			Ok(())
		}

		/// Replaces the group labels of a node. Labels are not checked
		/// against the declared groups.
		#[pallet::call_index(15)]
		pub fn set_node_groups(origin: OriginFor<T>, node: Name, groups: Vec<Name>) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			Nodes::<T>::try_mutate(node, |maybe| -> DispatchResult {
				let record = maybe.as_mut().ok_or(Error::<T>::NodeNotFound)?;
				record.net_groups = groups.clone();
				Ok(())
			})?;

			Self::deposit_event(Event::NodeGroupsSet { node, groups });
			Ok(())
		}

		/// Moves `bytes` of RAM quota from `entity` to the user `account`.
		///
		/// Emits `RamTransferred` event when successful.
		#[pallet::call_index(16)]
		pub fn set_ram(origin: OriginFor<T>, entity: Name, account: Name, bytes: i64) -> DispatchResult {
			Self::ensure_signed_by(origin, entity)?;

			let mut batch = CommandBatch::new();
			Self::transfer_ram(entity, account, bytes, &mut batch)?;
			batch.execute::<T::Host>()?;

			Self::deposit_event(Event::RamTransferred { entity, account, bytes });
			Ok(())
		}

		/// Asks the host to adopt `validators`, in order, as the next producer
		/// schedule.
		///
		/// Emits `ScheduleProposed` event when successful.
		#[pallet::call_index(17)]
		pub fn propose_schedule(origin: OriginFor<T>, validators: Vec<Name>) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			let producers = Self::build_schedule(&validators)?;

			let mut batch = CommandBatch::new();
			batch.push(HostCommand::ProposeSchedule { producers });
			batch.execute::<T::Host>()?;

			log::info!(target: LOG_TARGET, "proposed schedule of {} producers", validators.len());

			Self::deposit_event(Event::ScheduleProposed { producers: validators });
			Ok(())
		}

		/// Records the hash of the ABI `account` publishes.
		#[pallet::call_index(18)]
		pub fn set_abi(origin: OriginFor<T>, account: Name, abi: Vec<u8>) -> DispatchResult {
			Self::ensure_signed_by(origin, account)?;

			let hash = sp_io::hashing::blake2_256(&abi);
			AbiHashes::<T>::insert(account, hash);

			Self::deposit_event(Event::AbiHashSet { account, hash });
			Ok(())
		}

		#[pallet::call_index(19)]
		pub fn set_privileged(origin: OriginFor<T>, account: Name, privileged: bool) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			let mut batch = CommandBatch::new();
			batch.push(HostCommand::SetPrivileged { account, privileged });
			batch.execute::<T::Host>()?;

			Self::deposit_event(Event::PrivilegeSet { account, privileged });
			Ok(())
		}

		#[pallet::call_index(20)]
		pub fn set_account_limits(
			origin: OriginFor<T>,
			account: Name,
			limits: ResourceLimits,
		) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			let mut batch = CommandBatch::new();
			batch.push(HostCommand::SetResourceLimits { account, limits });
			batch.execute::<T::Host>()?;

			Self::deposit_event(Event::AccountLimitsSet { account, limits });
			Ok(())
		}

		#[pallet::call_index(21)]
		pub fn set_params(origin: OriginFor<T>, params: ChainParameters) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			let mut batch = CommandBatch::new();
			batch.push(HostCommand::SetParams { params });
			batch.execute::<T::Host>()?;

			Self::deposit_event(Event::ChainParametersSet { params });
			Ok(())
		}

		/// Asks the host to activate a protocol feature.
		///
		/// Emits `FeatureActivationRequested` event when successful.
		#[pallet::call_index(22)]
		pub fn activate_feature(origin: OriginFor<T>, digest: FeatureDigest) -> DispatchResult {
			T::CommitteeOrigin::ensure_origin(origin)?;

			let mut batch = CommandBatch::new();
			batch.push(HostCommand::ActivateFeature { digest });
			batch.execute::<T::Host>()?;

			log::info!(target: LOG_TARGET, "requested activation of feature {:?}", digest);

			Self::deposit_event(Event::FeatureActivationRequested { digest });
			Ok(())
		}

		/// Fails unless the feature is active. Lets a transaction depend on it.
		#[pallet::call_index(23)]
		pub fn require_activated(origin: OriginFor<T>, digest: FeatureDigest) -> DispatchResult {
			ensure_signed(origin)?;
			ensure!(T::Host::is_feature_activated(&digest), Error::<T>::FeatureNotActivated);
			Ok(())
		}

		/// Fails unless signed by `account`.
		#[pallet::call_index(24)]
		pub fn require_auth(origin: OriginFor<T>, account: Name) -> DispatchResult {
			Self::ensure_signed_by(origin, account)
		}
	}

	impl<T: Config> Pallet<T> {
		/// Resolves the signer to an account name and checks it is `expected`.
		pub(crate) fn ensure_signed_by(origin: OriginFor<T>, expected: Name) -> DispatchResult {
			let signer = Self::signer_name(origin)?;
			ensure!(signer == expected, Error::<T>::Unauthorized);
			Ok(())
		}

		/// Account name of the signer.
		pub(crate) fn signer_name(origin: OriginFor<T>) -> Result<Name, DispatchError> {
			let who = ensure_signed(origin)?;
			Ok(T::AccountNames::convert(who).ok_or(Error::<T>::Unauthorized)?)
		}

		/// Names no entity or node may take. Writer nodes double as permission
		/// names, and the system account keys the global writer record.
		pub(crate) fn is_reserved_name(name: Name) -> bool {
			name == Name::default() ||
				[permissions::OWNER, permissions::ACTIVE, permissions::WRITER].contains(&name) ||
				name == T::SystemAccount::get() ||
				name == T::WriterAccount::get()
		}

		/// Whether `name` can become a new entity or node. The host must not
		/// know an account of that name yet.
		pub(crate) fn is_free_name(name: Name) -> bool {
			!Self::is_reserved_name(name) &&
				!Entities::<T>::contains_key(name) &&
				!Nodes::<T>::contains_key(name) &&
				!T::Host::account_exists(name)
		}

		/// Checks the entity's policy, then stores the node.
		fn insert_node(
			entity: Name,
			name: Name,
			kind: NodeKind,
			signing_authority: Option<BlockSigningAuthority>,
		) -> DispatchResult {
			let owner = Entities::<T>::get(entity).ok_or(Error::<T>::EntityNotFound)?;
			ensure!(!Nodes::<T>::contains_key(name), Error::<T>::NodeAlreadyExists);
			ensure!(Self::is_free_name(name), Error::<T>::InvalidName);
			ensure!(
				owner.kind == EntityKind::Partner || kind == NodeKind::Writer,
				Error::<T>::NodeKindNotAllowed
			);

			Nodes::<T>::insert(
				name,
				Node {
					name,
					entity,
					kind,
					signing_authority,
					enabled: true,
					info: Vec::new(),
					ext_info: Vec::new(),
					net_groups: Vec::new(),
				},
			);
			NodesByEntity::<T>::insert(entity, name, kind);

			log::info!(target: LOG_TARGET, "{:?} node {} added to {}", kind, name, entity);
			Ok(())
		}
	}
}
