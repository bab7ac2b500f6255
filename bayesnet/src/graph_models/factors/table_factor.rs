use std::fmt;
use algorithm::prelude::*;
use errors::*;
use graph_models::counter::OpCounter;
use graph_models::traits::Domain;
use graph_models::variables::*;

/// A non-negative function over the outcomes of an ordered scope of
/// variables, stored as a dense table (the last variable varies fastest).
///
/// Every operation returns a new factor, the source is never modified.
#[derive(Clone)]
pub struct TableFactor<'a> {
    variables: Vec<&'a DiscreteVariable>,
    vars_dims: Vec<usize>,
    values: Vec<f64>
}

impl<'a> TableFactor<'a> {
    pub fn new(variables: Vec<&'a DiscreteVariable>, values: Vec<f64>) -> Result<TableFactor<'a>> {
        let mut scope: UniqueArray<&'a DiscreteVariable> = UniqueArray::with_capacity(variables.len());
        for &var in &variables {
            if !scope.push(var.get_id(), var) {
                bail!(ErrorKind::MalformedCPT(format!("variable '{}' appears twice in the scope", var.get_name())));
            }
        }

        let vars_dims: Vec<usize> = variables.iter().map(|v| v.get_domain_size()).collect();
        let numel: usize = vars_dims.iter().product();
        if values.len() != numel {
            bail!(ErrorKind::MalformedCPT(format!(
                "factor over [{}] needs {} values, got {}",
                variables.iter().map(|v| v.get_name()).collect::<Vec<_>>().join(", "), numel, values.len())));
        }

        Ok(TableFactor { variables, vars_dims, values })
    }

    /// Construct from parts that are consistent by construction
    fn from_parts(variables: Vec<&'a DiscreteVariable>, values: Vec<f64>) -> TableFactor<'a> {
        let vars_dims = variables.iter().map(|v| v.get_domain_size()).collect();
        TableFactor { variables, vars_dims, values }
    }

    pub fn get_variables(&self) -> &[&'a DiscreteVariable] {
        &self.variables
    }

    pub fn get_values(&self) -> &[f64] {
        &self.values
    }

    /// Number of rows of the table
    #[inline]
    pub fn numel(&self) -> usize {
        self.values.len()
    }

    pub fn touch(&self, var: &DiscreteVariable) -> bool {
        self.position(var.get_id()).is_some()
    }

    #[inline]
    fn position(&self, var_id: usize) -> Option<usize> {
        self.variables.iter().position(|v| v.get_id() == var_id)
    }

    /// Iterate rows in table order: (outcome index of each scope variable, value)
    pub fn iter_rows<'b>(&'b self) -> impl Iterator<Item=(Vec<usize>, f64)> + 'b {
        IterIndex::new(self.vars_dims.clone()).zip(self.values.iter().cloned())
    }

    /// Value of the row selected by `assignment`, which must cover the whole scope
    pub fn lookup(&self, assignment: &Assignment) -> Result<f64> {
        let mut index = Vec::with_capacity(self.variables.len());
        for var in &self.variables {
            match assignment.get(&var.get_id()) {
                Some(&outcome) => index.push(outcome),
                None => bail!(ErrorKind::IncompleteAssignment(var.get_name().to_owned()))
            }
        }

        if index.iter().zip(self.vars_dims.iter()).any(|(&i, &d)| i >= d) {
            bail!(ErrorKind::UnknownCombination(format!("{:?}", index)));
        }

        Ok(self.values[ravel_index(&index, &self.vars_dims)])
    }

    /// Keep only the rows agreeing with the evidence and drop the evidence
    /// variables from the scope. Evidence outside of the scope is ignored.
    pub fn restrict(&self, evidence: &[VariableOutcome<'a>]) -> TableFactor<'a> {
        // (position in scope, observed outcome)
        let mut observed: Vec<(usize, usize)> = Vec::new();
        for vo in evidence {
            if let Some(pos) = self.position(vo.variable.get_id()) {
                if observed.iter().all(|&(p, _)| p != pos) {
                    observed.push((pos, vo.outcome));
                }
            }
        }

        if observed.len() == 0 {
            return self.clone();
        }

        let variables = self.variables.iter().enumerate()
            .filter(|&(i, _)| observed.iter().all(|&(p, _)| p != i))
            .map(|(_, &v)| v)
            .collect::<Vec<_>>();
        let values = self.iter_rows()
            .filter(|&(ref idx, _)| observed.iter().all(|&(p, o)| idx[p] == o))
            .map(|(_, val)| val)
            .collect::<Vec<_>>();

        TableFactor::from_parts(variables, values)
    }

    /// Sum out `var`. Every value added to an already started group costs one addition.
    pub fn eliminate(&self, var: &DiscreteVariable, counter: &mut OpCounter) -> Result<TableFactor<'a>> {
        let pos = match self.position(var.get_id()) {
            Some(pos) => pos,
            None => bail!(ErrorKind::VariableNotInScope(var.get_name().to_owned()))
        };

        let mut variables = self.variables.clone();
        variables.remove(pos);
        let mut new_dims = self.vars_dims.clone();
        new_dims.remove(pos);

        let numel = self.numel() / self.vars_dims[pos];
        let mut values = vec![0.0; numel];
        let mut started = vec![false; numel];
        let mut n_sums = 0;

        for (mut idx, val) in self.iter_rows() {
            idx.remove(pos);
            let i = ravel_index(&idx, &new_dims);
            if started[i] {
                values[i] += val;
                n_sums += 1;
            } else {
                values[i] = val;
                started[i] = true;
            }
        }

        counter.add_sums(n_sums);
        Ok(TableFactor::from_parts(variables, values))
    }

    /// Pointwise product over the ordered union of both scopes (this scope
    /// first), one multiplication per produced row.
    pub fn join(&self, other: &TableFactor<'a>, counter: &mut OpCounter) -> TableFactor<'a> {
        // this scope keeps its columns, variables only found in `other` are appended
        let mut variables = self.variables.clone();
        let mut other_pos = Vec::with_capacity(other.variables.len());
        for &var in &other.variables {
            match self.position(var.get_id()) {
                Some(pos) => other_pos.push(pos),
                None => {
                    other_pos.push(variables.len());
                    variables.push(var);
                }
            }
        }

        let rows = IterIndex::new(variables.iter().map(|v| v.get_domain_size()).collect());
        let mut values = Vec::with_capacity(rows.numel());
        let n_self = self.variables.len();
        let mut other_idx = vec![0; other.variables.len()];

        for idx in rows {
            for (k, &p) in other_pos.iter().enumerate() {
                other_idx[k] = idx[p];
            }

            values.push(self.values[ravel_index(&idx[..n_self], &self.vars_dims)]
                * other.values[ravel_index(&other_idx, &other.vars_dims)]);
        }

        counter.add_products(values.len());
        TableFactor::from_parts(variables, values)
    }

    /// Join a list of factors, smallest first. Ties are broken by the sum of the
    /// character codes of the scope's variable names so the order (and therefore
    /// the operation count) is reproducible.
    pub fn join_all(mut factors: Vec<TableFactor<'a>>, counter: &mut OpCounter) -> Result<TableFactor<'a>> {
        if factors.len() == 0 {
            bail!(ErrorKind::EmptyFactorList);
        }

        factors.sort_by_key(|f| (f.numel(), f.name_code_sum()));
        let mut iter = factors.into_iter();
        let first = iter.next().ok_or(ErrorKind::EmptyFactorList)?;

        Ok(iter.fold(first, |result, f| result.join(&f, counter)))
    }

    fn name_code_sum(&self) -> u64 {
        self.variables.iter()
            .flat_map(|v| v.get_name().chars())
            .map(|c| c as u64)
            .sum()
    }

    /// Divide every value by the total. A zero total produces non-finite values.
    pub fn normalize(&self, counter: &mut OpCounter) -> TableFactor<'a> {
        let total: f64 = self.values.iter().sum();
        counter.add_sums(self.numel().saturating_sub(1));

        TableFactor {
            variables: self.variables.clone(),
            vars_dims: self.vars_dims.clone(),
            values: self.values.iter().map(|&v| v / total).collect()
        }
    }
}

impl<'a> fmt::Display for TableFactor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{:<10} | ", var.get_name())?;
        }
        writeln!(f, "Probability")?;

        for _ in &self.variables {
            write!(f, "-----------|-")?;
        }
        writeln!(f, "-----------")?;

        for (idx, val) in self.iter_rows() {
            for (var, &i) in self.variables.iter().zip(idx.iter()) {
                write!(f, "{:<10} | ", var.get_domain().get_value(i))?;
            }
            writeln!(f, "{:.7}", val)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Debug for TableFactor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TableFactor({:?}, {} rows)",
               self.variables.iter().map(|v| v.get_name()).collect::<Vec<_>>(), self.numel())
    }
}
