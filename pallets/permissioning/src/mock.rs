use crate as pallet_permissioning;
use crate::{EntityKind, FeatureDigest, HostCommand, NewAccountHook, PermissionHost, ResourceLimits};
use frame_support::{
	derive_impl, ensure, parameter_types,
	traits::{ConstU16, ConstU32, ConstU64, Everything},
	Blake2_128Concat,
};
use frame_system::EnsureRoot;
use permissioning_primitives::{Authority, Name};
use sp_core::H256;
use sp_runtime::{
	traits::{BlakeTwo256, Convert, IdentityLookup},
	BuildStorage, DispatchError, DispatchResult,
};
use std::cell::RefCell;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
	pub enum Test {
		System: frame_system,
		Permissioning: pallet_permissioning,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type BaseCallFilter = Everything;
	type BlockWeights = ();
	type BlockLength = ();
	type DbWeight = ();
	type RuntimeOrigin = RuntimeOrigin;
	type RuntimeCall = RuntimeCall;
	type Block = Block;
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type AccountId = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type RuntimeEvent = RuntimeEvent;
	type BlockHashCount = ConstU64<250>;
	type Version = ();
	type PalletInfo = PalletInfo;
	type AccountData = ();
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type SS58Prefix = ConstU16<42>;
	type OnSetCode = ();
	type MaxConsumers = ConstU32<16>;
}

pub const SYSTEM: Name = Name::from_static("eosio");
pub const WRITER: Name = Name::from_static("writer");

pub const ENTITY_LIMITS: ResourceLimits =
	ResourceLimits { ram_bytes: 10_000, net_weight: 100, cpu_weight: 100 };
pub const VALIDATOR_LIMITS: ResourceLimits =
	ResourceLimits { ram_bytes: -1, net_weight: -1, cpu_weight: -1 };

parameter_types! {
	pub const SystemAccount: Name = SYSTEM;
	pub const WriterAccount: Name = WRITER;
	pub const EntityResourceLimits: ResourceLimits = ENTITY_LIMITS;
	pub const ValidatorResourceLimits: ResourceLimits = VALIDATOR_LIMITS;
}

/// Signers are `u64`s holding the raw value of their account name.
pub struct AccountToName;
impl Convert<u64, Option<Name>> for AccountToName {
	fn convert(who: u64) -> Option<Name> {
		(who != 0).then_some(Name(who))
	}
}

impl pallet_permissioning::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type CommitteeOrigin = EnsureRoot<u64>;
	type Host = MockHost;
	type AccountNames = AccountToName;
	type SystemAccount = SystemAccount;
	type WriterAccount = WriterAccount;
	type EntityResourceLimits = EntityResourceLimits;
	type ValidatorResourceLimits = ValidatorResourceLimits;
	type WeightInfo = ();
}

// Host state lives in storage so it rolls back with the pallet's own.
#[frame_support::storage_alias]
pub type HostAccounts = StorageMap<Host, Blake2_128Concat, Name, ResourceLimits>;

#[frame_support::storage_alias]
pub type HostLog = StorageValue<Host, Vec<HostCommand>, ValueQuery>;

#[frame_support::storage_alias]
pub type HostPrivileged = StorageMap<Host, Blake2_128Concat, Name, bool, ValueQuery>;

/// Features activate as soon as they are requested.
#[frame_support::storage_alias]
pub type HostFeatures = StorageMap<Host, Blake2_128Concat, FeatureDigest, bool, ValueQuery>;

thread_local! {
	static REJECT: RefCell<Option<fn(&HostCommand) -> bool>> = RefCell::new(None);
}

/// Records every request and keeps just enough account state for the pallet
/// to read back. New accounts start metered with no quota.
pub struct MockHost;

impl MockHost {
	/// Makes the host fail every request matching `filter`.
	pub fn reject_when(filter: fn(&HostCommand) -> bool) {
		REJECT.with(|r| *r.borrow_mut() = Some(filter));
	}

	pub fn accept_all() {
		REJECT.with(|r| *r.borrow_mut() = None);
	}

	/// Creates an account the way a writer would, running the creation hook.
	pub fn create_account(
		creator: Name,
		name: Name,
		owner: Authority,
		active: Authority,
	) -> DispatchResult {
		Self::execute(&HostCommand::NewAccount { creator, name, owner, active })
	}

	fn rejects(command: &HostCommand) -> bool {
		REJECT.with(|r| r.borrow().map_or(false, |filter| filter(command)))
	}
}

impl PermissionHost for MockHost {
	fn account_exists(account: Name) -> bool {
		HostAccounts::contains_key(account)
	}

	fn is_feature_activated(digest: &FeatureDigest) -> bool {
		HostFeatures::get(digest)
	}

	fn resource_limits(account: Name) -> Option<ResourceLimits> {
		HostAccounts::get(account)
	}

	fn execute(command: &HostCommand) -> DispatchResult {
		ensure!(!Self::rejects(command), DispatchError::Other("rejected by host"));
		HostLog::mutate(|log| log.push(command.clone()));

		match command {
			HostCommand::NewAccount { creator, name, owner, active } => {
				ensure!(!HostAccounts::contains_key(name), DispatchError::Other("account exists"));
				HostAccounts::insert(name, ResourceLimits::default());
				Permissioning::on_new_account(*creator, *name, owner, active)?;
			},
			HostCommand::SetResourceLimits { account, limits } => {
				ensure!(HostAccounts::contains_key(account), DispatchError::Other("unknown account"));
				HostAccounts::insert(account, limits);
			},
			HostCommand::SetPrivileged { account, privileged } => {
				HostPrivileged::insert(account, privileged);
			},
			HostCommand::ActivateFeature { digest } => {
				ensure!(!HostFeatures::get(digest), DispatchError::Other("already activated"));
				HostFeatures::insert(digest, true);
			},
			_ => {},
		}
		Ok(())
	}
}

/// Requests the host has executed so far, in order.
pub fn host_log() -> Vec<HostCommand> {
	HostLog::get()
}

/// Drains the request log.
pub fn take_host_log() -> Vec<HostCommand> {
	HostLog::take()
}

pub fn name(text: &str) -> Name {
	text.parse().unwrap()
}

pub fn signed(account: Name) -> RuntimeOrigin {
	RuntimeOrigin::signed(account.value())
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
	new_test_ext_with(Vec::new())
}

pub fn new_test_ext_with(entities: Vec<(Name, EntityKind)>) -> sp_io::TestExternalities {
	MockHost::accept_all();

	let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
	pallet_permissioning::GenesisConfig::<Test> { entities: entities.clone(), ..Default::default() }
		.assimilate_storage(&mut t)
		.unwrap();

	let mut ext = sp_io::TestExternalities::new(t);
	ext.execute_with(|| {
		System::set_block_number(1);
		let unmetered = ResourceLimits { ram_bytes: -1, net_weight: -1, cpu_weight: -1 };
		HostAccounts::insert(SYSTEM, unmetered);
		HostAccounts::insert(WRITER, unmetered);
		for (entity, _) in &entities {
			HostAccounts::insert(entity, ENTITY_LIMITS);
		}
	});
	ext
}
