use crate::error::Error;
use std::cmp::Ordering;

/// Policy used to pick the surviving root when two sets are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Merge {
    /// Attach the root of lower rank under the root of higher rank. On a tie,
    /// the root of the first argument survives and its rank grows by one.
    #[default]
    Rank,
    /// Always attach the root of the second argument under the root of the
    /// first argument. Ranks are left untouched and tree height is not
    /// controlled. Useful as a baseline when comparing tree shapes.
    Naive,
}

/**
Partition of the elements `0..n` into disjoint sets.

Each set is stored as a tree of parent links, and the root of the tree is the
representative of the set. `find` compresses the path it walks, so even queries
that look read-only take `&mut self`.

Every operation has an unchecked form that panics on an out of range element,
the same way slice indexing does, and a `try_` form that returns
`Error::IndexOutOfBounds` without touching the structure.
*/
#[derive(Debug, Clone, Default)]
pub struct DisjointSets {
    parents: Vec<usize>,
    ranks: Vec<u8>,
}

impl DisjointSets {
    /// Create `n` singleton sets. Every element is its own root with rank 0.
    pub fn new(n: usize) -> DisjointSets {
        DisjointSets {
            parents: (0..n).collect(),
            ranks: vec![0; n],
        }
    }

    /// Same as `new`, but also returns a size mapping initialized to all 1s,
    /// ready to be passed to `union_by_size`.
    pub fn with_sizes(n: usize) -> (DisjointSets, Vec<usize>) {
        (DisjointSets::new(n), vec![1; n])
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    fn check(&self, index: usize) -> Result<usize, Error> {
        if index < self.parents.len() {
            Ok(index)
        } else {
            Err(Error::IndexOutOfBounds(index, self.parents.len()))
        }
    }

    /// Immediate parent of `x`. Roots are their own parents.
    pub fn parent(&self, x: usize) -> usize {
        self.parents[x]
    }

    /// Rank of `x`. Only meaningful when `x` is a root.
    pub fn rank(&self, x: usize) -> usize {
        usize::from(self.ranks[x])
    }

    pub fn is_root(&self, x: usize) -> bool {
        self.parents[x] == x
    }

    /// Root of `x` without compressing the path.
    pub(crate) fn root_of(&self, mut x: usize) -> usize {
        while self.parents[x] != x {
            x = self.parents[x];
        }
        x
    }

    /// Number of parent links between `x` and its root. Does not compress.
    pub fn depth(&self, mut x: usize) -> usize {
        let mut depth = 0;
        while self.parents[x] != x {
            x = self.parents[x];
            depth += 1;
        }
        depth
    }

    /// Find the representative of the set containing `x`.
    ///
    /// Every node visited on the way is re-linked directly to the root.
    pub fn find(&mut self, x: usize) -> usize {
        let root = self.root_of(x);
        // Second pass re-links the path.
        let mut current = x;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    pub fn try_find(&mut self, x: usize) -> Result<usize, Error> {
        let x = self.check(x)?;
        Ok(self.find(x))
    }

    /// Merge the sets containing `u` and `v` using union by rank. Returns
    /// true if they were in different sets.
    pub fn union_sets(&mut self, u: usize, v: usize) -> bool {
        self.union_with(u, v, Merge::default())
    }

    pub fn try_union_sets(&mut self, u: usize, v: usize) -> Result<bool, Error> {
        self.try_union_with(u, v, Merge::default())
    }

    /// Merge the sets containing `u` and `v` with the given policy. Returns
    /// true if they were in different sets.
    ///
    /// The surviving root depends on the order of the arguments, so only the
    /// resulting connectivity is symmetric in `u` and `v`.
    pub fn union_with(&mut self, u: usize, v: usize, merge: Merge) -> bool {
        let uroot = self.find(u);
        let vroot = self.find(v);
        if uroot == vroot {
            return false;
        }
        match merge {
            Merge::Rank => match self.ranks[uroot].cmp(&self.ranks[vroot]) {
                Ordering::Less => self.parents[uroot] = vroot,
                Ordering::Greater => self.parents[vroot] = uroot,
                Ordering::Equal => {
                    self.parents[vroot] = uroot;
                    self.ranks[uroot] += 1;
                }
            },
            Merge::Naive => self.parents[vroot] = uroot,
        }
        true
    }

    pub fn try_union_with(&mut self, u: usize, v: usize, merge: Merge) -> Result<bool, Error> {
        let u = self.check(u)?;
        let v = self.check(v)?;
        Ok(self.union_with(u, v, merge))
    }

    /**
    Merge the sets containing `u` and `v` using union by size. Returns true if
    they were in different sets.

    `sizes` is owned by the caller and must have one entry per element,
    initially all 1s. Only the entries of roots are meaningful. The root of
    the smaller set is attached under the root of the larger one, and the
    size of the survivor is accumulated. On equal sizes the root of `u` is
    attached under the root of `v`, which is the opposite of the tie-break
    used by `union_sets`.

    Ranks are not updated, so mixing this with rank based merges on the same
    structure leaves ranks as loose bounds.
    */
    pub fn union_by_size(&mut self, u: usize, v: usize, sizes: &mut [usize]) -> bool {
        let uroot = self.find(u);
        let vroot = self.find(v);
        if uroot == vroot {
            return false;
        }
        if sizes[uroot] > sizes[vroot] {
            self.parents[vroot] = uroot;
            sizes[uroot] += sizes[vroot];
        } else {
            self.parents[uroot] = vroot;
            sizes[vroot] += sizes[uroot];
        }
        true
    }

    pub fn try_union_by_size(
        &mut self,
        u: usize,
        v: usize,
        sizes: &mut [usize],
    ) -> Result<bool, Error> {
        if sizes.len() != self.len() {
            return Err(Error::SizeMismatch(sizes.len(), self.len()));
        }
        let u = self.check(u)?;
        let v = self.check(v)?;
        Ok(self.union_by_size(u, v, sizes))
    }

    /// Check if `u` and `v` are in the same set.
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    pub fn try_connected(&mut self, u: usize, v: usize) -> Result<bool, Error> {
        let u = self.check(u)?;
        let v = self.check(v)?;
        Ok(self.connected(u, v))
    }

    /// Iterate over the current roots in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(i, p)| if i == *p { Some(i) } else { None })
    }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.roots().count()
    }

    /// Collect the partition. Each set is sorted, and the sets are ordered by
    /// their smallest element.
    /// Also compresses every path.
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        for i in 0..self.len() {
            self.find(i);
        }
        self.groups()
    }

    /// Same ordering as `sets`, without compressing.
    pub(crate) fn groups(&self) -> Vec<Vec<usize>> {
        let mut slots = vec![usize::MAX; self.len()];
        let mut out: Vec<Vec<usize>> = Vec::new();
        for i in 0..self.len() {
            let root = self.root_of(i);
            if slots[root] == usize::MAX {
                slots[root] = out.len();
                out.push(Vec::new());
            }
            out[slots[root]].push(i);
        }
        out
    }
}
