use frame_support::{ensure, pallet_prelude::*};
use permissioning_primitives::{Name, ProducerKey};
use sp_std::prelude::*;

use crate::{Config, Error, NodeKind, Nodes, Pallet};

impl<T: Config> Pallet<T> {
	/// Producer keys for `validators`, in the given order.
	///
	/// Each validator contributes the first key of its signing authority.
	pub fn build_schedule(validators: &[Name]) -> Result<Vec<ProducerKey>, DispatchError> {
		let mut producers = Vec::with_capacity(validators.len());
		for name in validators {
			let node = Nodes::<T>::get(name).ok_or(Error::<T>::NodeNotFound)?;
			ensure!(node.kind == NodeKind::Validator, Error::<T>::NotAValidator);

			let key = node
				.signing_authority
				.as_ref()
				.and_then(|auth| auth.primary_key())
				.ok_or(Error::<T>::MissingSigningAuthority)?;
			producers.push(ProducerKey { producer_name: *name, block_signing_key: key.clone() });
		}

		ensure!(!producers.is_empty(), Error::<T>::EmptySchedule);
		Ok(producers)
	}
}
