use crate::error::Error;
use crate::Result;

/// Array-backed binary min-heap over any totally ordered payload.
///
/// Storage is 0-indexed with parent at `(i - 1) / 2` and children at
/// `2i + 1` and `2i + 2`.
pub struct MinHeap<T: Ord> {
    elements: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            elements: Vec::new(),
        }
    }

    /// Builds a heap from an arbitrary sequence in linear time by sifting
    /// every internal node down, last internal node first.
    pub fn from_elements(elements: Vec<T>) -> Self {
        let mut heap = MinHeap { elements };
        for index in (0..heap.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `value` and restores heap order by sifting it up.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Returns the minimum without removing it.
    pub fn peek_min(&self) -> Result<&T> {
        self.elements.first().ok_or(Error::EmptyHeap)
    }

    /// Removes and returns the minimum. The last element moves into the
    /// root slot and is sifted back down.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let minimum = self
            .elements
            .pop()
            .expect("heap checked non-empty before pop");
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(minimum)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    fn sift_up(&mut self, start: usize) {
        let mut index = start;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.elements[index] >= self.elements[parent] {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, start: usize) {
        let mut index = start;
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            // Child bounds are strict; an inclusive check would read one
            // element past the end of the storage.
            if left < self.elements.len() && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < self.elements.len() && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
