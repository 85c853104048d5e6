use crate::logic::Formula;
use crate::symbol::Symbol;

use super::visitor::FormulaVisitor;

pub struct ToBasicOps;

impl FormulaVisitor for ToBasicOps {
    type Ret = Formula;

    fn visit_var(&mut self, atom: &Symbol) -> Self::Ret {
        Formula::Var(atom.clone())
    }

    fn visit_not(&mut self, child: &Formula) -> Self::Ret {
        Formula::Not(self.visit(child).into())
    }

    fn visit_and(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        Formula::And(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_or(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        Formula::Or(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_impl(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        let left = self.visit(left).into();
        let right = self.visit(right).into();
        Formula::Or(Formula::Not(left).into(), right)
    }

    fn visit_equiv(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        let left = self.visit(left);
        let right = self.visit(right);
        let not_left = Formula::Not(left.clone().into()).into();
        let not_right = Formula::Not(right.clone().into()).into();

        let both_t = Formula::And(left.into(), right.into()).into();
        let both_f = Formula::And(not_left, not_right).into();

        Formula::Or(both_t, both_f)
    }
}
