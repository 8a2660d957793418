use crate::dsu::DisjointSets;

/// Writes the partition as space separated sets, for example `{0, 1} {2}`.
/// Sets are ordered by their smallest element. Paths are not compressed.
impl std::fmt::Display for DisjointSets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sets = self.groups();
        for (si, set) in sets.iter().enumerate() {
            if si > 0 {
                write!(f, " ")?;
            }
            write!(f, "{{")?;
            for (ei, elem) in set.iter().enumerate() {
                if ei > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", elem)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}
