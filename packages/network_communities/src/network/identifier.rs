// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::collections::HashMap;
use std::hash::Hash;

/// Assigns dense indices to values in order of first appearance. Identifying a value that was
/// already seen returns its original index.
pub struct Identifier<T> {
    original_to_new: HashMap<T, usize>,
    new_to_original: Vec<T>,
}

impl<T> Identifier<T>
where
    T: Clone + Hash + Eq,
{
    pub fn new() -> Self {
        return Identifier {
            original_to_new: HashMap::new(),
            new_to_original: Vec::new(),
        };
    }

    pub fn with_capacity(capacity: usize) -> Self {
        return Identifier {
            original_to_new: HashMap::with_capacity(capacity),
            new_to_original: Vec::with_capacity(capacity),
        };
    }

    pub fn identify(
        &mut self,
        original: T,
    ) -> usize {
        return match self.original_to_new.get(&original) {
            Some(id) => *id,
            None => {
                let new_id: usize = self.new_to_original.len();
                self.original_to_new.insert(original.clone(), new_id);
                self.new_to_original.push(original);
                new_id
            }
        };
    }

    pub fn len(&self) -> usize {
        return self.new_to_original.len();
    }

    pub fn finish(self) -> (HashMap<T, usize>, Vec<T>) {
        return (self.original_to_new, self.new_to_original);
    }
}
