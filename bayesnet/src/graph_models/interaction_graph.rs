use fnv::{ FnvHashMap, FnvHashSet };
use graph_models::factors::TableFactor;
use graph_models::variables::DiscreteVariable;

type Neighbors = FnvHashMap<usize, FnvHashSet<usize>>;

/// Undirected graph connecting variables that share the scope of a factor.
/// Used to compute greedy elimination orderings.
pub struct InteractionGraph<'a> {
    /// nodes sorted by name, which is also the tie-break order of the heuristics
    variables: Vec<&'a DiscreteVariable>,
    neighbors: Neighbors
}

impl<'a> InteractionGraph<'a> {
    pub fn new(factors: &[TableFactor<'a>]) -> InteractionGraph<'a> {
        let mut variables: Vec<&'a DiscreteVariable> = Vec::new();
        let mut neighbors: Neighbors = Default::default();

        for factor in factors {
            let scope = factor.get_variables();
            for &var in scope {
                let adj = neighbors.entry(var.get_id()).or_insert_with(|| {
                    variables.push(var);
                    Default::default()
                });
                for u in scope {
                    if u.get_id() != var.get_id() {
                        adj.insert(u.get_id());
                    }
                }
            }
        }

        variables.sort_by(|a, b| a.get_name().cmp(b.get_name()));
        InteractionGraph { variables, neighbors }
    }

    pub fn n_nodes(&self) -> usize {
        self.variables.len()
    }

    /// Neighbors of `var` sorted by name (empty if `var` isn't in the graph)
    pub fn neighbors(&self, var: &DiscreteVariable) -> Vec<&'a DiscreteVariable> {
        match self.neighbors.get(&var.get_id()) {
            None => Vec::new(),
            Some(adj) => self.variables.iter()
                .filter(|v| adj.contains(&v.get_id()))
                .cloned()
                .collect()
        }
    }

    /// Minimum degree heuristic: eliminate the node with the fewest neighbors first
    pub fn min_degree_order(&self, to_eliminate: &FnvHashSet<usize>) -> Vec<&'a DiscreteVariable> {
        self.greedy_order(to_eliminate, |var_id, neighbors| neighbors[&var_id].len())
    }

    /// Minimum fill heuristic: eliminate the node whose removal adds the fewest
    /// edges between its neighbors first
    pub fn min_fill_order(&self, to_eliminate: &FnvHashSet<usize>) -> Vec<&'a DiscreteVariable> {
        self.greedy_order(to_eliminate, |var_id, neighbors| {
            let adj = neighbors[&var_id].iter().cloned().collect::<Vec<_>>();
            let mut fill = 0;
            for i in 0..adj.len() {
                for j in (i + 1)..adj.len() {
                    if !neighbors[&adj[i]].contains(&adj[j]) {
                        fill += 1;
                    }
                }
            }
            fill
        })
    }

    /// Repeatedly remove the cheapest node (first by name on ties), connecting its
    /// neighbors pairwise. Works on a copy, the graph itself is untouched.
    fn greedy_order<F>(&self, to_eliminate: &FnvHashSet<usize>, cost: F) -> Vec<&'a DiscreteVariable>
        where F: Fn(usize, &Neighbors) -> usize
    {
        let mut remained = self.variables.clone();
        let mut neighbors = self.neighbors.clone();
        let mut order = Vec::with_capacity(remained.len());

        while remained.len() > 0 {
            let mut best = 0;
            let mut best_cost = usize::max_value();
            for (i, var) in remained.iter().enumerate() {
                let c = cost(var.get_id(), &neighbors);
                if c < best_cost {
                    best_cost = c;
                    best = i;
                }
            }

            let var = remained.remove(best);
            let adj = neighbors.remove(&var.get_id()).unwrap_or_default();
            for &u in &adj {
                if let Some(u_adj) = neighbors.get_mut(&u) {
                    u_adj.remove(&var.get_id());
                    u_adj.extend(adj.iter().filter(|&&w| w != u));
                }
            }

            trace!("eliminate {} (cost = {})", var.get_name(), best_cost);
            order.push(var);
        }

        order.into_iter()
            .filter(|v| to_eliminate.contains(&v.get_id()))
            .collect()
    }
}
