//! Step-by-step reveal of a returned path.
//!
//! The animator itself owns no timer. The caller asks for a [`StepTicket`]
//! when it wants to schedule the next step and hands it back when the
//! delay fires. Every change to the path or cursor bumps the epoch, so a
//! ticket issued before the change is ignored and two overlapping timers
//! can never advance the cursor twice.

use super::types::NodeId;

/// Permission to advance the cursor once, valid until the next change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepTicket {
	epoch: u64,
}

#[derive(Clone, Debug, Default)]
pub struct PathAnimator {
	path: Vec<NodeId>,
	cursor: usize,
	epoch: u64,
}

impl PathAnimator {
	pub fn path(&self) -> &[NodeId] {
		&self.path
	}

	/// Number of path edges currently revealed.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn set_path(&mut self, path: Vec<NodeId>) {
		self.path = path;
		self.cursor = 0;
		self.epoch += 1;
	}

	pub fn clear(&mut self) {
		self.set_path(Vec::new());
	}

	/// True while there are edges left to reveal.
	pub fn is_running(&self) -> bool {
		self.cursor + 1 < self.path.len()
	}

	pub fn next_step(&self) -> Option<StepTicket> {
		self.is_running().then_some(StepTicket { epoch: self.epoch })
	}

	/// Advance by one edge if `ticket` is still current.
	pub fn fire(&mut self, ticket: StepTicket) -> bool {
		if ticket.epoch != self.epoch || !self.is_running() {
			return false;
		}
		self.cursor += 1;
		self.epoch += 1;
		true
	}

	pub fn revealed_segments(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
		self.path.windows(2).take(self.cursor).map(|w| (w[0], w[1]))
	}

	pub fn pending_segments(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
		self.path.windows(2).skip(self.cursor).map(|w| (w[0], w[1]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run_to_end(anim: &mut PathAnimator) -> Vec<usize> {
		let mut cursors = vec![anim.cursor()];
		while let Some(ticket) = anim.next_step() {
			assert!(anim.fire(ticket));
			cursors.push(anim.cursor());
		}
		cursors
	}

	#[test]
	fn reveals_one_edge_per_step() {
		let mut anim = PathAnimator::default();
		anim.set_path(vec![2, 0, 5]);
		assert_eq!(anim.revealed_segments().count(), 0);
		let t = anim.next_step().unwrap();
		anim.fire(t);
		assert_eq!(anim.revealed_segments().collect::<Vec<_>>(), vec![(2, 0)]);
		let t = anim.next_step().unwrap();
		anim.fire(t);
		assert_eq!(
			anim.revealed_segments().collect::<Vec<_>>(),
			vec![(2, 0), (0, 5)]
		);
		assert_eq!(anim.pending_segments().count(), 0);
	}

	#[test]
	fn halts_at_last_edge() {
		let mut anim = PathAnimator::default();
		anim.set_path(vec![2, 0, 5]);
		assert_eq!(run_to_end(&mut anim), vec![0, 1, 2]);
		assert!(!anim.is_running());
		assert!(anim.next_step().is_none());
	}

	#[test]
	fn stale_ticket_is_ignored() {
		let mut anim = PathAnimator::default();
		anim.set_path(vec![1, 2, 3, 4]);
		let first = anim.next_step().unwrap();
		let duplicate = first;
		assert!(anim.fire(first));
		assert!(!anim.fire(duplicate));
		assert_eq!(anim.cursor(), 1);
	}

	#[test]
	fn new_path_invalidates_pending_step() {
		let mut anim = PathAnimator::default();
		anim.set_path(vec![1, 2, 3]);
		let ticket = anim.next_step().unwrap();
		anim.set_path(vec![3, 2]);
		assert!(!anim.fire(ticket));
		assert_eq!(anim.cursor(), 0);
	}

	#[test]
	fn empty_and_single_node_paths_never_run() {
		let mut anim = PathAnimator::default();
		assert!(anim.next_step().is_none());
		anim.set_path(vec![7]);
		assert!(anim.next_step().is_none());
		anim.clear();
		assert!(anim.path().is_empty());
	}
}
