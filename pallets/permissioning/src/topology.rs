use frame_support::{ensure, pallet_prelude::*};
use permissioning_primitives::Name;
use sp_std::prelude::*;

use crate::{
	pair_key, Config, Error, LinkDirection, NetGroup, NetGroups, NetLink, NetLinkByPair, NetLinks,
	NextNetLinkId, Nodes, Pallet, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
	/// Creates the `a`-`b` link or updates the direction of the existing one.
	///
	/// A stored link keeps its endpoints. When the caller names them the other
	/// way round, `direction` is reversed so it keeps its meaning.
	pub(crate) fn upsert_link(
		a: Name,
		b: Name,
		direction: LinkDirection,
	) -> Result<NetLink, DispatchError> {
		ensure!(a != b, Error::<T>::SelfLink);
		let key = pair_key(a, b);

		if let Some(id) = NetLinkByPair::<T>::get(key) {
			return NetLinks::<T>::try_mutate(id, |maybe| {
				let link = maybe.as_mut().ok_or(Error::<T>::NetLinkNotFound)?;
				link.direction = if link.node_a == a { direction } else { direction.reversed() };
				Ok(link.clone())
			});
		}

		ensure!(Nodes::<T>::contains_key(a), Error::<T>::NodeNotFound);
		ensure!(Nodes::<T>::contains_key(b), Error::<T>::NodeNotFound);

		let id = NextNetLinkId::<T>::get();
		let next = id.checked_add(1).ok_or(Error::<T>::ArithmeticOverflow)?;
		NextNetLinkId::<T>::put(next);

		let link = NetLink { id, node_a: a, node_b: b, direction };
		NetLinks::<T>::insert(id, link.clone());
		NetLinkByPair::<T>::insert(key, id);

		log::debug!(target: LOG_TARGET, "net link {} created between {} and {}", id, a, b);
		Ok(link)
	}

	pub(crate) fn remove_link(a: Name, b: Name) -> Result<NetLink, DispatchError> {
		let id = NetLinkByPair::<T>::take(pair_key(a, b)).ok_or(Error::<T>::NetLinkNotFound)?;
		let link = NetLinks::<T>::take(id).ok_or(Error::<T>::NetLinkNotFound)?;
		Ok(link)
	}

	pub(crate) fn insert_group(name: Name, nodes: Vec<Name>) -> DispatchResult {
		ensure!(!NetGroups::<T>::contains_key(name), Error::<T>::GroupAlreadyExists);
		for node in &nodes {
			ensure!(Nodes::<T>::contains_key(node), Error::<T>::NodeNotFound);
		}

		NetGroups::<T>::insert(name, NetGroup { name, nodes });
		Ok(())
	}

	/// Drops `removed` nodes from every group and deletes every link touching
	/// one of them.
	pub(crate) fn purge_topology(removed: &[Name]) {
		if removed.is_empty() {
			return;
		}

		let groups: Vec<Name> = NetGroups::<T>::iter()
			.filter(|(_, group)| group.nodes.iter().any(|n| removed.contains(n)))
			.map(|(name, _)| name)
			.collect();
		for name in groups {
			NetGroups::<T>::mutate(name, |maybe| {
				if let Some(group) = maybe {
					group.nodes.retain(|n| !removed.contains(n));
				}
			});
		}

		let links: Vec<NetLink> = NetLinks::<T>::iter_values()
			.filter(|link| removed.contains(&link.node_a) || removed.contains(&link.node_b))
			.collect();
		for link in &links {
			NetLinks::<T>::remove(link.id);
			NetLinkByPair::<T>::remove(pair_key(link.node_a, link.node_b));
		}

		if !links.is_empty() {
			log::debug!(target: LOG_TARGET, "purged {} net links", links.len());
		}
	}
}
