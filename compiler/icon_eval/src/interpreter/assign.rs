//! Assignment: `:=`, `op:=`, `:=:` and the `/x := v` default idiom.
//!
//! The left side is resolved to a [`Place`] before the right side is
//! evaluated, so side effects happen left to right.

use std::rc::Rc;

use icon_ir::{BinaryOp, Expr, ExprKind, UnaryOp};

use super::Interpreter;
use crate::errors::invalid_assignment;
use crate::outcome::succeed;
use crate::value::{
    char_at, expected, replace_char, resolve_index, to_integer, to_string, ListRef, TableRef,
};
use crate::{evaluate_binary, ControlAction, EvalResult, Outcome, Value};

/// Something that can be assigned to.
enum Place {
    Variable(String),
    ListSlot(ListRef, usize),
    TableSlot(TableRef, Value),
    /// One character of a string held in `owner`. Assigning rebuilds the
    /// string and stores it back.
    Char {
        owner: Box<Place>,
        text: Rc<String>,
        index: i64,
    },
}

fn describe(target: &Expr) -> String {
    match &target.kind {
        ExprKind::Keyword(name) => name.clone(),
        ExprKind::Call { .. } => "procedure call".to_string(),
        ExprKind::Unary { op, .. } => format!("unary {}", op.as_symbol()),
        ExprKind::Binary { op, .. } => format!("operator {}", op.as_symbol()),
        _ => "expression".to_string(),
    }
}

fn is_variable(target: &Expr) -> bool {
    match &target.kind {
        ExprKind::Ident(_) | ExprKind::Subscript { .. } => true,
        ExprKind::Grouping(inner) => is_variable(inner),
        _ => false,
    }
}

impl Interpreter<'_> {
    fn resolve_place(&mut self, target: &Expr) -> Result<Outcome<Place>, ControlAction> {
        match &target.kind {
            ExprKind::Ident(name) => Ok(Outcome::Success(Place::Variable(name.clone()))),
            ExprKind::Grouping(inner) => self.resolve_place(inner),
            ExprKind::Subscript { target, index } => self.resolve_element(target, index),
            _ => Err(invalid_assignment(describe(target))
                .with_span(target.span)
                .into()),
        }
    }

    /// `container[index]` as a place. Lists and tables are shared, so any
    /// expression yielding one will do; a string must come from a variable.
    fn resolve_element(
        &mut self,
        container: &Expr,
        index: &Expr,
    ) -> Result<Outcome<Place>, ControlAction> {
        let (owner, value) = if is_variable(container) {
            let place = succeed!(self.resolve_place(container)?);
            let value = self.read_place(&place);
            (Some(place), value)
        } else {
            (None, succeed!(self.eval(container)?))
        };
        let index = succeed!(self.eval(index)?);

        let place = match value {
            Value::List(items) => {
                let i = succeed!(to_integer(&index));
                let len = items.borrow().len();
                let slot = succeed!(Outcome::from(resolve_index(i, len)));
                Place::ListSlot(items, slot)
            }
            Value::Table(table) => Place::TableSlot(table, index),
            other => {
                let Some(owner) = owner else {
                    return Err(invalid_assignment(describe(container))
                        .with_span(container.span)
                        .into());
                };
                let text = succeed!(to_string(&other).and_then(|text| match &other {
                    Value::String(_) | Value::Integer(_) | Value::Real(_) | Value::Cset(_) => {
                        Outcome::Success(text)
                    }
                    _ => expected("string, list or table", &other),
                }));
                let index = succeed!(to_integer(&index));
                if char_at(&text, index).is_none() {
                    return Ok(Outcome::fail());
                }
                Place::Char {
                    owner: Box::new(owner),
                    text,
                    index,
                }
            }
        };
        Ok(Outcome::Success(place))
    }

    fn read_place(&self, place: &Place) -> Value {
        match place {
            Place::Variable(name) => self.env.lookup(name),
            Place::ListSlot(items, slot) => {
                items.borrow().get(*slot).cloned().unwrap_or_default()
            }
            Place::TableSlot(table, key) => table.borrow().get(key),
            Place::Char { text, index, .. } => {
                char_at(text, *index).map_or(Value::Null, Value::string)
            }
        }
    }

    /// `place` with any string snapshot re-read from its owner, for use
    /// after another store may have changed that owner.
    fn refresh(&self, place: Place) -> Place {
        match place {
            Place::Char { owner, text, index } => {
                let owner = Box::new(self.refresh(*owner));
                let text = match self.read_place(&owner) {
                    Value::String(current) => current,
                    _ => text,
                };
                Place::Char { owner, text, index }
            }
            other => other,
        }
    }

    fn store(&mut self, place: Place, value: Value) -> Outcome<Value> {
        match place {
            Place::Variable(name) => Outcome::Success(self.env.define(&name, value)),
            Place::ListSlot(items, slot) => match items.borrow_mut().get_mut(slot) {
                Some(element) => {
                    *element = value.clone();
                    Outcome::Success(value)
                }
                None => Outcome::fail(),
            },
            Place::TableSlot(table, key) => {
                table.borrow_mut().insert(key, value.clone());
                Outcome::Success(value)
            }
            Place::Char {
                owner,
                mut text,
                index,
            } => to_string(&value).and_then(|with| {
                if replace_char(&mut text, index, &with).is_none() {
                    return Outcome::fail();
                }
                self.store(*owner, Value::String(text)).map(|_| value)
            }),
        }
    }

    /// `target := value`, including `/x := value`, which assigns only
    /// when `x` is `&null` and fails otherwise.
    pub(super) fn eval_assign(&mut self, target: &Expr, value: &Expr) -> EvalResult {
        if let ExprKind::Unary {
            op: UnaryOp::IsNull,
            operand,
        } = &target.kind
        {
            let place = succeed!(self.resolve_place(operand)?);
            if !self.read_place(&place).is_null() {
                return Ok(Outcome::fail());
            }
            let value = succeed!(self.eval(value)?);
            return Ok(self.store(place, value));
        }

        let place = succeed!(self.resolve_place(target)?);
        let value = succeed!(self.eval(value)?);
        Ok(self.store(place, value))
    }

    /// `target op:= value`. Nothing is stored if the operation fails.
    pub(super) fn eval_aug_assign(
        &mut self,
        op: BinaryOp,
        target: &Expr,
        value: &Expr,
    ) -> EvalResult {
        let place = succeed!(self.resolve_place(target)?);
        let current = self.read_place(&place);
        let value = succeed!(self.eval(value)?);
        let combined = succeed!(evaluate_binary(op, &current, &value)?);
        Ok(self.store(place, combined))
    }

    /// `a :=: b`: exchange the values of two places.
    pub(super) fn eval_swap(&mut self, left: &Expr, right: &Expr) -> EvalResult {
        let left = succeed!(self.resolve_place(left)?);
        let right = succeed!(self.resolve_place(right)?);
        let a = self.read_place(&left);
        let b = self.read_place(&right);
        succeed!(self.store(right, a));
        let left = self.refresh(left);
        Ok(self.store(left, b))
    }
}
