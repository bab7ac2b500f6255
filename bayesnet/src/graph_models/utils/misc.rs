use fnv::FnvHashSet;
use algorithm::combination::IterIndex;
use errors::*;
use graph_models::variables::*;

pub fn get_variables_index(variables: &[&DiscreteVariable]) -> FnvHashSet<usize> {
    let mut vars_set = FnvHashSet::with_capacity_and_hasher(variables.len(), Default::default());
    for v in variables {
        vars_set.insert(v.get_id());
    }
    vars_set
}

/// Iter all assignments of `vars` (last variable changes fastest), each one
/// extending the fixed `base` assignment, and apply a function. Stop at the
/// first error.
pub fn iter_assignment<F>(vars: &[&DiscreteVariable], base: &Assignment, mut func: F) -> Result<()>
    where F: FnMut(&Assignment) -> Result<()>
{
    let mut assignment = base.clone();
    let dims = vars.iter().map(|v| v.get_domain_size()).collect::<Vec<_>>();

    for idx in IterIndex::new(dims) {
        for (var, &outcome) in vars.iter().zip(idx.iter()) {
            assignment.insert(var.get_id(), outcome);
        }
        func(&assignment)?;
    }

    Ok(())
}
