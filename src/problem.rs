use crate::error::RatLpError;
use crate::util::Rational;

use num_traits::{Signed, Zero};

use std::collections::{HashMap, HashSet};

const LTE_STR: &str = "\u{2264}";
const EQ_STR: &str = "\u{003D}";
const GTE_STR: &str = "\u{2265}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl std::default::Default for Direction {
    fn default() -> Self {
        Direction::Maximize
    }
}

#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub direction: Direction,
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    var_names: HashSet<String>, //these strings are duplicated in the variables
    var_ids: HashSet<VariableId>,
}

impl Problem {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    pub fn add_var(
        &mut self,
        obj_coeff: Rational,
        name: Option<String>,
    ) -> Result<VariableId, RatLpError> {
        let id = VariableId(self.variables.len());

        if let Some(name) = &name {
            if !self.var_names.insert(name.clone()) {
                return Err(RatLpError::invalid(format!(
                    "variable names must be unique, {} was added twice",
                    name
                )));
            }
        }

        self.variables.push(Variable::new(id, obj_coeff, name));
        self.var_ids.insert(id);

        Ok(id)
    }

    pub fn add_constraint(
        &mut self,
        coeffs: Vec<(VariableId, Rational)>,
        op: ConstraintOp,
        rhs: Rational,
    ) -> Result<(), RatLpError> {
        match coeffs
            .iter()
            .find(|(id, _coeff)| !self.var_ids.contains(id))
        {
            Some((invalid_var, _coeff)) => Err(RatLpError::invalid(format!(
                "{:?} is invalid",
                invalid_var
            ))),

            None => {
                self.constraints.push(Constraint { coeffs, op, rhs });
                Ok(())
            }
        }
    }

    #[inline]
    pub fn vars(&self) -> &[Variable] {
        self.variables.as_slice()
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        self.constraints.as_slice()
    }

    /// Objective value of `x` in the direction the problem was stated in.
    pub fn obj(&self, x: &[Rational]) -> Rational {
        self.variables
            .iter()
            .zip(x)
            .fold(Rational::zero(), |acc, (var, x_i)| acc + &var.obj_coeff * x_i)
    }

    pub fn is_feasible(&self, x: &[Rational]) -> bool {
        if x.len() != self.variables.len() {
            return false;
        }

        if x.iter().any(|x_i| x_i.is_negative()) {
            return false;
        }

        self.constraints
            .iter()
            .all(|constraint| constraint.is_feasible(x))
    }
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub id: VariableId,
    pub obj_coeff: Rational,
    pub name: Option<String>,
}

impl Variable {
    fn new(id: VariableId, obj_coeff: Rational, name: Option<String>) -> Self {
        Self {
            id,
            obj_coeff,
            name,
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        //Problem add_var guarantees that different variables have different ids
        self.id == other.id
    }
}

impl Eq for Variable {}

impl std::hash::Hash for Variable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone)]
pub struct Constraint {
    pub coeffs: Vec<(VariableId, Rational)>,
    pub op: ConstraintOp,
    pub rhs: Rational,
}

impl Constraint {
    fn is_feasible(&self, x: &[Rational]) -> bool {
        let mut lhs = Rational::zero();

        for (var, coeff) in &self.coeffs {
            let i: usize = var.into();
            lhs += coeff * &x[i];
        }

        match self.op {
            ConstraintOp::Lte => lhs <= self.rhs,
            ConstraintOp::Eq => lhs == self.rhs,
            ConstraintOp::Gte => lhs >= self.rhs,
        }
    }

    fn display(
        &self,
        f: &mut std::fmt::Formatter,
        var_names: &HashMap<VariableId, &Variable>,
    ) -> std::fmt::Result {
        for (var_id, coeff) in &self.coeffs {
            if coeff.is_zero() {
                continue;
            }

            match var_names.get(var_id) {
                Some(var) => write_term(f, coeff, var)?,
                None => write_term(f, coeff, &format!("{:?}", var_id))?,
            }
        }

        write!(f, "{} {}", self.op, self.rhs)
    }
}

fn write_term(
    f: &mut std::fmt::Formatter,
    coeff: &Rational,
    var: &dyn std::fmt::Display,
) -> std::fmt::Result {
    write!(
        f,
        "{} {} {} ",
        if coeff.is_negative() { "-" } else { "+" },
        coeff.abs(),
        var
    )
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VariableId(usize);

impl std::convert::From<usize> for VariableId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl std::convert::From<VariableId> for usize {
    fn from(id: VariableId) -> Self {
        id.0
    }
}

impl std::convert::From<&VariableId> for usize {
    fn from(id: &VariableId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    Lte,
    Eq,
    Gte,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.direction {
            Direction::Maximize => writeln!(f, "maximize")?,
            Direction::Minimize => writeln!(f, "minimize")?,
        }

        let mut var_id_to_var: HashMap<VariableId, &Variable> = HashMap::new();

        for var in &self.variables {
            var_id_to_var.insert(var.id, var);

            if var.obj_coeff.is_zero() {
                continue;
            }

            write_term(f, &var.obj_coeff, var)?;
        }

        writeln!(f, "\n\nsubject to")?;

        for constraint in &self.constraints {
            constraint.display(f, &var_id_to_var)?;
            writeln!(f)?;
        }

        writeln!(f, "\nwith the bounds")?;

        for var in &self.variables {
            writeln!(f, "{} {} 0", var, GTE_STR)?;
        }

        Ok(())
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "x{}", self.id.0 + 1),
        }
    }
}

impl std::fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConstraintOp::Lte => write!(f, "{}", LTE_STR),
            ConstraintOp::Eq => write!(f, "{}", EQ_STR),
            ConstraintOp::Gte => write!(f, "{}", GTE_STR),
        }
    }
}
