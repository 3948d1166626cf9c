use crate::consts::InodePointer;
use crate::structure::inode::Inode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Occupied(Inode),
}

impl Slot {
    pub fn inode(&self) -> Option<&Inode> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(inode) => Some(inode),
        }
    }
}

pub struct InodeTable {
    slots: Vec<Slot>,
}

impl InodeTable {
    pub fn new(inode_count: usize) -> InodeTable {
        InodeTable { slots: vec![Slot::Empty; inode_count] }
    }

    /// Lowest empty slot, if any.
    pub fn find_free(&self) -> Option<InodePointer> {
        self.slots.iter().position(|slot| *slot == Slot::Empty)
    }

    pub fn read(&self, index: InodePointer) -> Option<&Inode> {
        self.slots.get(index).and_then(Slot::inode)
    }

    pub(crate) fn read_mut(&mut self, index: InodePointer) -> Option<&mut Inode> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(inode)) => Some(inode),
            _ => None,
        }
    }

    pub(crate) fn write(&mut self, index: InodePointer, inode: Inode) {
        self.slots[index] = Slot::Occupied(inode);
    }

    /// Empties the slot and hands back what it held.
    pub(crate) fn clear(&mut self, index: InodePointer) -> Option<Inode> {
        match std::mem::replace(&mut self.slots[index], Slot::Empty) {
            Slot::Empty => None,
            Slot::Occupied(inode) => Some(inode),
        }
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|slot| **slot == Slot::Empty).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }
}
