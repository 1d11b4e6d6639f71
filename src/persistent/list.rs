//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`ImmutableList`], a cons-list built from two
//! variants: [`ImmutableList::Empty`] and [`ImmutableList::Node`]. Every
//! node owns its element and holds a shared reference to its tail, so any
//! number of lists can reuse the same suffix.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`), `head`, `tail` and `clone`
//! - O(n) `append`, `reverse`, `map`, `filter`, `flat_map`
//! - every combinator returns a new list; no list ever mutates another
//!
//! All traversals are loops or explicit work-stacks, so the call-stack depth
//! never depends on the list length.
//!
//! # Examples
//!
//! ```rust
//! use fplist::list;
//! use fplist::persistent::ImmutableList;
//!
//! let list = list![1, 2, 3];
//! assert_eq!(list.head(), Ok(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let doubled = list.map(|x| x * 2);
//! assert_eq!(doubled, list![2, 4, 6]);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1:                1 -> 2 -> 3 -> Empty
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> Empty]  // shares [1, 2, 3]
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use num_traits::{One, Zero};

use super::{EmptyListError, ReferenceCounter};
use crate::control::Optional;
use crate::typeclass::{Functor, Monoid, Semigroup, Traversable, TypeConstructor};

/// A cell of an [`ImmutableList`]: one element and the (shared) rest of the list.
pub struct Link<T> {
    head: T,
    tail: ImmutableList<T>,
}

impl<T> Link<T> {
    /// Returns the element stored in this cell.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns the list that follows this cell.
    #[inline]
    pub const fn tail(&self) -> &ImmutableList<T> {
        &self.tail
    }
}

impl<T> Drop for Link<T> {
    // Unlinks uniquely owned successors one by one so that dropping a long
    // chain does not recurse once per node.
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.tail);
        while let ImmutableList::Node(link) = next {
            match ReferenceCounter::try_unwrap(link) {
                Ok(mut owned) => next = std::mem::take(&mut owned.tail),
                Err(_) => break,
            }
        }
    }
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `cons`       | O(1)       |
/// | `head`       | O(1)       |
/// | `tail`       | O(1)       |
/// | `clone`      | O(1)       |
/// | `len`        | O(n)       |
/// | `drop`       | O(n)       |
/// | `init`       | O(n)       |
/// | `append`     | O(n)       |
/// | `reverse`    | O(n)       |
/// | `concat`     | O(n * k)   |
///
/// # Examples
///
/// ```rust
/// use fplist::persistent::ImmutableList;
///
/// let list = ImmutableList::singleton(42);
/// assert_eq!(list.head(), Ok(&42));
/// assert!(list.tail().unwrap().is_empty());
/// ```
pub enum ImmutableList<T> {
    /// The terminal node shared by every list.
    Empty,
    /// A cell holding an element and the shared rest of the list.
    Node(ReferenceCounter<Link<T>>),
}

impl<T> ImmutableList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::persistent::ImmutableList;
    ///
    /// let list: ImmutableList<i32> = ImmutableList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::Empty.prepend(element)
    }

    /// Moves `self` behind a new cell holding `element`.
    #[inline]
    pub(crate) fn prepend(self, element: T) -> Self {
        Self::Node(ReferenceCounter::new(Link {
            head: element,
            tail: self,
        }))
    }

    /// Builds a list that keeps the order of `elements`.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut result = Self::new();
        while let Some(element) = elements.pop() {
            result = result.prepend(element);
        }
        result
    }

    /// Prepends an element, sharing the whole of `self` as the new tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::persistent::ImmutableList;
    ///
    /// let list = ImmutableList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        self.clone().prepend(element)
    }

    /// Returns `true` if the list is [`ImmutableList::Empty`].
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    /// use fplist::persistent::{EmptyListError, ImmutableList};
    ///
    /// assert_eq!(list![1, 2].head(), Ok(&1));
    ///
    /// let empty: ImmutableList<i32> = ImmutableList::new();
    /// assert_eq!(empty.head(), Err(EmptyListError::Empty { operation: "head" }));
    /// ```
    pub fn head(&self) -> Result<&T, EmptyListError> {
        match self {
            Self::Empty => Err(EmptyListError::Empty { operation: "head" }),
            Self::Node(link) => Ok(&link.head),
        }
    }

    /// Returns the list without its first element.
    ///
    /// The result shares every node with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError::Empty`] if the list is empty.
    pub fn tail(&self) -> Result<Self, EmptyListError> {
        match self {
            Self::Empty => Err(EmptyListError::Empty { operation: "tail" }),
            Self::Node(link) => Ok(link.tail.clone()),
        }
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty.
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        match self {
            Self::Empty => None,
            Self::Node(link) => Some((&link.head, link.tail.clone())),
        }
    }

    /// Replaces the first element, keeping the shared tail.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError::Empty`] if there is no first element to replace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.set_head(9), Ok(list![9, 2, 3]));
    /// ```
    pub fn set_head(&self, element: T) -> Result<Self, EmptyListError> {
        match self {
            Self::Empty => Err(EmptyListError::Empty {
                operation: "set_head",
            }),
            Self::Node(link) => Ok(link.tail.clone().prepend(element)),
        }
    }

    /// Removes the first `count` elements.
    ///
    /// The result is a suffix of `self` and shares its nodes.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError::NotEnoughElements`] if `count` exceeds the
    /// length of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    /// use fplist::persistent::EmptyListError;
    ///
    /// let list = list![1, 2, 3, 4, 5];
    /// assert_eq!(list.drop(2), Ok(list![3, 4, 5]));
    /// assert_eq!(
    ///     list.drop(6),
    ///     Err(EmptyListError::NotEnoughElements { requested: 6, available: 5 })
    /// );
    /// ```
    pub fn drop(&self, count: usize) -> Result<Self, EmptyListError> {
        let mut current = self;
        for dropped in 0..count {
            match current {
                Self::Empty => {
                    return Err(EmptyListError::NotEnoughElements {
                        requested: count,
                        available: dropped,
                    });
                }
                Self::Node(link) => current = &link.tail,
            }
        }
        Ok(current.clone())
    }

    /// Removes the longest prefix whose elements satisfy `predicate`.
    ///
    /// Returns [`ImmutableList::Empty`] when every element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// let list = list![1, 2, 3, 4, 1];
    /// assert_eq!(list.drop_while(|x| *x < 3), list![3, 4, 1]);
    /// ```
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self;
        while let Self::Node(link) = current {
            if !predicate(&link.head) {
                break;
            }
            current = &link.tail;
        }
        current.clone()
    }

    /// Folds the list from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// let digits = list![1, 2, 3].fold_left(0, |accumulator, x| accumulator * 10 + x);
    /// assert_eq!(digits, 123);
    /// ```
    pub fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Folds the list from right to left.
    ///
    /// The elements are first pushed onto an explicit stack and then folded
    /// in reverse, so arbitrarily long lists are safe to fold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// let rendered = list![1, 2, 3].fold_right(String::from("Empty"), |x, accumulator| {
    ///     format!("Node({x}, {accumulator})")
    /// });
    /// assert_eq!(rendered, "Node(1, Node(2, Node(3, Empty)))");
    /// ```
    pub fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let stack: Vec<&T> = self.iter().collect();
        stack
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Returns the number of elements, counted with a left fold.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub const fn iter(&self) -> ImmutableListIterator<'_, T> {
        ImmutableListIterator { current: self }
    }

    /// Applies `function` to every element, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// let rendered = list![0.0, 1.0, 2.0].map(|x| format!("{x:.1}"));
    /// assert_eq!(rendered, list!["0.0".to_string(), "1.0".to_string(), "2.0".to_string()]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> ImmutableList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.fold_right(ImmutableList::new(), |element, accumulator| {
            accumulator.prepend(function(element))
        })
    }

    /// Combines two lists pairwise.
    ///
    /// The result is as long as the shorter input; surplus elements of the
    /// longer list are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// assert_eq!(list![1, 2, 3].zip_with(&list![4, 5, 6], |a, b| a + b), list![5, 7, 9]);
    /// assert_eq!(list![1, 2].zip_with(&list![1, 2, 3], |a, b| a + b), list![2, 4]);
    /// ```
    #[must_use]
    pub fn zip_with<U, C, F>(&self, other: &ImmutableList<U>, mut function: F) -> ImmutableList<C>
    where
        F: FnMut(&T, &U) -> C,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| function(left, right))
            .collect()
    }
}

impl<T: Clone> ImmutableList<T> {
    /// Creates a list from a slice, keeping its order.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        slice
            .iter()
            .rev()
            .fold(Self::new(), |accumulator, element| {
                accumulator.prepend(element.clone())
            })
    }

    /// Returns every element except the last one.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// assert_eq!(list![1, 2, 3].init(), Ok(list![1, 2]));
    /// assert_eq!(list![1].init(), Ok(list![]));
    /// ```
    pub fn init(&self) -> Result<Self, EmptyListError> {
        let mut elements: Vec<&T> = self.iter().collect();
        if elements.pop().is_none() {
            return Err(EmptyListError::Empty { operation: "init" });
        }
        Ok(elements
            .into_iter()
            .rev()
            .fold(Self::new(), |accumulator, element| {
                accumulator.prepend(element.clone())
            }))
    }

    /// Returns a new list with the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::new(), |accumulator, element| {
            accumulator.prepend(element.clone())
        })
    }

    /// Returns the elements of `self` followed by the elements of `other`.
    ///
    /// Only the nodes of `self` are copied; `other` becomes the shared tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4].append(&list![5, 6]), list![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        self.fold_right(other.clone(), |element, accumulator| {
            accumulator.prepend(element.clone())
        })
    }

    /// Appends a single element at the end of the list.
    #[must_use]
    pub fn snoc(&self, element: T) -> Self {
        self.fold_right(Self::singleton(element), |element, accumulator| {
            accumulator.prepend(element.clone())
        })
    }

    /// Keeps the elements that satisfy `predicate`, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].filter(|x| x % 2 != 0), list![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.fold_right(Self::new(), |element, accumulator| {
            if predicate(element) {
                accumulator.prepend(element.clone())
            } else {
                accumulator
            }
        })
    }

    /// Maps every element to a list and concatenates the results in order.
    ///
    /// Implemented as a right fold over `self` whose step right-folds each
    /// mapped sub-list onto the accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// assert_eq!(list![1, 2, 3].flat_map(|x| list![*x, *x]), list![1, 1, 2, 2, 3, 3]);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, mut function: F) -> ImmutableList<B>
    where
        B: Clone,
        F: FnMut(&T) -> ImmutableList<B>,
    {
        self.fold_right(ImmutableList::new(), |element, accumulator| {
            function(element).fold_right(accumulator, |inner, rest| rest.prepend(inner.clone()))
        })
    }
}

impl<T: Clone> ImmutableList<ImmutableList<T>> {
    /// Flattens a list of lists, right-folding with [`ImmutableList::append`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    ///
    /// let lists = list![list![1, 2, 3], list![4, 5, 6], list![7, 8, 9]];
    /// assert_eq!(lists.concat(), list![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    #[must_use]
    pub fn concat(&self) -> ImmutableList<T> {
        self.fold_right(ImmutableList::new(), |list, accumulator| {
            list.append(&accumulator)
        })
    }
}

impl<T: Clone + Zero> ImmutableList<T> {
    /// Adds up the elements; the sum of an empty list is zero.
    #[must_use]
    pub fn sum(&self) -> T {
        self.fold_left(T::zero(), |accumulator, element| {
            accumulator + element.clone()
        })
    }
}

impl<T: Clone + One> ImmutableList<T> {
    /// Multiplies the elements; the product of an empty list is one.
    #[must_use]
    pub fn product(&self) -> T {
        self.fold_left(T::one(), |accumulator, element| {
            accumulator * element.clone()
        })
    }
}

/// Builds an [`ImmutableList`] from its elements, first element at the head.
///
/// # Examples
///
/// ```rust
/// use fplist::list;
/// use fplist::persistent::ImmutableList;
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.head(), Ok(&1));
///
/// let empty: ImmutableList<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::persistent::ImmutableList::new()
    };

    ($($element:expr),+ $(,)?) => {
        <$crate::persistent::ImmutableList<_> as ::core::iter::FromIterator<_>>::from_iter([
            $($element),+
        ])
    };
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of an [`ImmutableList`].
pub struct ImmutableListIterator<'a, T> {
    current: &'a ImmutableList<T>,
}

impl<'a, T> Iterator for ImmutableListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            ImmutableList::Empty => None,
            ImmutableList::Node(link) => {
                self.current = &link.tail;
                Some(&link.head)
            }
        }
    }
}

/// An owning iterator over elements of an [`ImmutableList`].
///
/// Elements are cloned out because the nodes may be shared.
pub struct ImmutableListIntoIterator<T> {
    list: ImmutableList<T>,
}

impl<T: Clone> Iterator for ImmutableListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = match &self.list {
            ImmutableList::Empty => return None,
            ImmutableList::Node(link) => (link.head.clone(), link.tail.clone()),
        };
        self.list = tail;
        Some(head)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ImmutableList<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(link) => Self::Node(ReferenceCounter::clone(link)),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = ImmutableListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ImmutableListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = ImmutableListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for ImmutableList<T> {
    type Inner = T;
    type WithType<B> = ImmutableList<B>;
}

impl<T: Clone> Functor for ImmutableList<T> {
    fn fmap<B, F>(self, mut function: F) -> ImmutableList<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|element| function(element.clone()))
    }
}

impl<T: Clone> Semigroup for ImmutableList<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for ImmutableList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// Right fold: `function` sees the elements from last to first.
impl<T: Clone> Traversable for ImmutableList<T> {
    fn traverse_optional<B, F>(self, mut function: F) -> Optional<ImmutableList<B>>
    where
        F: FnMut(T) -> Optional<B>,
    {
        self.fold_right(
            Optional::new(ImmutableList::new()),
            |element, accumulator| {
                function(element.clone()).combine(accumulator, |head, tail| tail.prepend(head))
            },
        )
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct ImmutableListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ImmutableListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ImmutableList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(ImmutableList::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ImmutableListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableList<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
