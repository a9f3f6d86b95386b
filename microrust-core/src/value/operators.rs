// src/value/operators.rs
//
// `std::ops` sugar over the primitive operations. Every combination of owned
// and borrowed handles is supported, as well as `f64` on either side; a
// constant is lifted to a fresh leaf and handed to the two-handle primitive,
// so each derivative rule has exactly one implementation.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl<'b> $trait<&'b Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

// Compound assignment rebinds the handle to the new node; the node it used
// to point at stays in the graph as an operand.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Value> for Value {
            fn $method(&mut self, rhs: Value) {
                *self = $op_fn(self, &rhs);
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            fn $method(&mut self, rhs: &'b Value) {
                *self = $op_fn(self, rhs);
            }
        }

        impl $trait<f64> for Value {
            fn $method(&mut self, rhs: f64) {
                *self = $op_fn(self, &Value::new(rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}
