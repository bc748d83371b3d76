#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_permissioning.
pub trait WeightInfo {
    fn add_entity() -> Weight;
    fn remove_entity() -> Weight;
    fn set_entity_info() -> Weight;
    fn set_entity_ext_info() -> Weight;
    fn add_validator() -> Weight;
    fn add_writer() -> Weight;
    fn add_boot() -> Weight;
    fn add_observer() -> Weight;
    fn remove_node() -> Weight;
    fn set_node_info() -> Weight;
    fn set_node_ext_info() -> Weight;
    fn add_net_link() -> Weight;
    fn remove_net_link() -> Weight;
    fn create_group() -> Weight;
    fn remove_group() -> Weight;
    fn set_node_groups() -> Weight;
    fn set_ram() -> Weight;
    fn propose_schedule() -> Weight;
    fn set_abi() -> Weight;
    fn set_privileged() -> Weight;
    fn set_account_limits() -> Weight;
    fn set_params() -> Weight;
    fn activate_feature() -> Weight;
    fn require_activated() -> Weight;
    fn require_auth() -> Weight;
}

/// Default weights for pallet_permissioning
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn add_entity() -> Weight {
        Weight::from_parts(20_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(2))
    }

    fn remove_entity() -> Weight {
        Weight::from_parts(40_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(6))
    }

    fn set_entity_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn set_entity_ext_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn add_validator() -> Weight {
        Weight::from_parts(25_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }

    fn add_writer() -> Weight {
        Weight::from_parts(30_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }

    fn add_boot() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }

    fn add_observer() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }

    fn remove_node() -> Weight {
        Weight::from_parts(35_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(5))
    }

    fn set_node_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn set_node_ext_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn add_net_link() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    fn remove_net_link() -> Weight {
        Weight::from_parts(12_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }

    fn create_group() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn remove_group() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn set_node_groups() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn set_ram() -> Weight {
        Weight::from_parts(20_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
    }

    fn propose_schedule() -> Weight {
        Weight::from_parts(30_000, 0)
            .saturating_add(T::DbWeight::get().reads(21))
    }

    fn set_abi() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn set_privileged() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn set_account_limits() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn set_params() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn activate_feature() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn require_activated() -> Weight {
        Weight::from_parts(5_000, 0)
    }

    fn require_auth() -> Weight {
        Weight::from_parts(5_000, 0)
    }
}

impl WeightInfo for () {
    fn add_entity() -> Weight {
        Weight::from_parts(20_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(2))
    }

    fn remove_entity() -> Weight {
        Weight::from_parts(40_000, 0)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(6))
    }

    fn set_entity_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn set_entity_ext_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn add_validator() -> Weight {
        Weight::from_parts(25_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(2))
    }

    fn add_writer() -> Weight {
        Weight::from_parts(30_000, 0)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(4))
    }

    fn add_boot() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(2))
    }

    fn add_observer() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(2))
    }

    fn remove_node() -> Weight {
        Weight::from_parts(35_000, 0)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(5))
    }

    fn set_node_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn set_node_ext_info() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn add_net_link() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(3))
    }

    fn remove_net_link() -> Weight {
        Weight::from_parts(12_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(2))
    }

    fn create_group() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn remove_group() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn set_node_groups() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn set_ram() -> Weight {
        Weight::from_parts(20_000, 0)
            .saturating_add(RocksDbWeight::get().reads(3))
    }

    fn propose_schedule() -> Weight {
        Weight::from_parts(30_000, 0)
            .saturating_add(RocksDbWeight::get().reads(21))
    }

    fn set_abi() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn set_privileged() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn set_account_limits() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn set_params() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn activate_feature() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn require_activated() -> Weight {
        Weight::from_parts(5_000, 0)
    }

    fn require_auth() -> Weight {
        Weight::from_parts(5_000, 0)
    }
}
