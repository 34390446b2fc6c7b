/// Owning link to a subtree. `None` is the empty subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// Height reported for an empty subtree.
pub const EMPTY_HEIGHT: i32 = -1;

/// Binary tree node carrying a cached height.
///
/// The cached height is only ever written by [`Node::update_height`], which
/// recomputes it from the live children. Every setter that swaps a child
/// calls it, so a node reachable from a tree always reports its true height
/// as long as its children do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
    height: i32,
}

impl<K> Node<K> {
    #[inline]
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    #[inline]
    pub fn boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    /// Cached height. A leaf has height 0.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn left_child(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right_child(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn has_left_child(&self) -> bool {
        self.left.is_some()
    }

    #[inline]
    pub fn has_right_child(&self) -> bool {
        self.right.is_some()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recomputes the cached height from the children and returns it.
    pub fn update_height(&mut self) -> i32 {
        self.height = match (self.left_child(), self.right_child()) {
            (None, None) => 0,
            (Some(l), None) => l.height + 1,
            (None, Some(r)) => r.height + 1,
            (Some(l), Some(r)) => l.height.max(r.height) + 1,
        };
        self.height
    }

    pub fn set_left(&mut self, left: Link<K>) {
        self.left = left;
        self.update_height();
    }

    pub fn set_right(&mut self, right: Link<K>) {
        self.right = right;
        self.update_height();
    }

    pub fn set_children(&mut self, left: Link<K>, right: Link<K>) {
        self.left = left;
        self.right = right;
        self.update_height();
    }

    /// Detaches the left subtree; the height then reflects the right side
    /// alone.
    pub fn take_left(&mut self) -> Link<K> {
        let left = self.left.take();
        self.update_height();
        left
    }

    /// Detaches the right subtree. See [`Node::take_left`].
    pub fn take_right(&mut self) -> Link<K> {
        let right = self.right.take();
        self.update_height();
        right
    }
}

/// Height of a possibly empty subtree.
#[inline]
pub fn height<K>(node: Option<&Node<K>>) -> i32 {
    node.map_or(EMPTY_HEIGHT, Node::height)
}
