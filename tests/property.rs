#![cfg(feature = "property")]

pub mod common;
use common::*;

#[property]
fn absolute_times_sign_is_identity(value: i64) -> bool {
    absolute(value) * sign(value) == value
}

#[property]
fn compiles_with_no_output(value: &i64) {
    let _ = value;
}

#[property(seed = 7)]
fn compiles_with_seed(value: &i64) -> bool {
    value.abs() < MAX_SIZE as i64
}

#[property(size = 64, shrinks = 100)]
fn compiles_with_size_and_shrinks(value: i64) -> bool {
    value.abs() < 64
}

#[property(removal = "sweep")]
fn compiles_with_removal_name(items: &Vec<i64>) -> bool {
    let mut reversed = items.clone();
    reversed.reverse();
    reversed.reverse();
    &reversed == items
}

#[property(removal = Removal::Last, seed = 11)]
fn compiles_with_removal_expression(items: Vec<i64>) -> bool {
    items.len() < MAX_SIZE
}

#[property]
fn compiles_with_result(value: i64) -> Result<(), String> {
    if absolute(value) >= 0 {
        Ok(())
    } else {
        Err(format!("negative absolute value for {value}"))
    }
}

#[property]
#[should_panic]
fn panics_on_counterexample(value: i64) -> bool {
    value.abs() < 10
}

#[property(removal = "sweep")]
#[should_panic]
fn panics_on_non_palindrome(items: &Vec<i64>) -> bool {
    palindrome(items)
}

#[falsify::property(shrinks = 0)]
#[should_panic]
fn compiles_with_qualified_path(value: i64) -> bool {
    value.abs() < 10
}
