use crate::value::SetValueError;

/// Where the node behind a value handle lives.
///
/// `Borrowed` nodes are edited in place inside the caller's tree. `Shared`
/// nodes were reached through a read-only path and refuse mutation. `Owned`
/// nodes belong to a deep copy.
#[derive(Debug)]
pub(crate) enum NodeSlot<'a, T> {
    Borrowed(&'a mut T),
    Missing,
    Owned(Box<T>),
    Shared(&'a T),
}

/// A short-lived view of a [`NodeSlot`]'s node that keeps track of whether
/// the node may be handed out mutably.
pub(crate) enum NodeRef<'s, T> {
    Mut(&'s mut T),
    Shared(&'s T),
}
impl<'s, T> NodeRef<'s, T> {
    pub(crate) fn into_slot(self) -> NodeSlot<'s, T> {
        match self {
            Self::Mut(node) => NodeSlot::Borrowed(node),
            Self::Shared(node) => NodeSlot::Shared(node),
        }
    }
}

impl<'a, T: Clone> NodeSlot<'a, T> {
    pub(crate) fn from_option(node: Option<&'a mut T>) -> Self {
        node.map_or(Self::Missing, Self::Borrowed)
    }

    pub(crate) fn deep_copy<'b>(&self) -> NodeSlot<'b, T> where T: 'b {
        match self.get() {
            Some(node) => NodeSlot::Owned(Box::new(node.clone())),
            None => NodeSlot::Missing,
        }
    }

    pub(crate) fn get(&self) -> Option<&T> {
        match self {
            Self::Borrowed(node) => Some(&**node),
            Self::Missing => None,
            Self::Owned(node) => Some(node.as_ref()),
            Self::Shared(node) => Some(*node),
        }
    }

    pub(crate) fn get_mut(&mut self) -> Result<&mut T, SetValueError> {
        match self {
            Self::Borrowed(node) => Ok(&mut **node),
            Self::Missing => Err(SetValueError::UnsupportedMutation(
                "a value that does not exist",
            )),
            Self::Owned(node) => Ok(node.as_mut()),
            Self::Shared(_) => Err(SetValueError::UnsupportedMutation(
                "a value reached read-only through a variable reference",
            )),
        }
    }

    pub(crate) fn reborrow(&mut self) -> Option<NodeRef<'_, T>> {
        match self {
            Self::Borrowed(node) => Some(NodeRef::Mut(&mut **node)),
            Self::Missing => None,
            Self::Owned(node) => Some(NodeRef::Mut(node.as_mut())),
            Self::Shared(node) => Some(NodeRef::Shared(*node)),
        }
    }
}
