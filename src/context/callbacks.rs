/*!
General callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable: a
[Deduction](crate::reports::Deduction) carries clones of the statements involved, so a
receiver holds no borrow into the context.
*/

use crate::reports::Deduction;

use super::Context;

pub type CallbackDeduction = dyn FnMut(&Deduction);

impl Context {
    /// Sets a callback receiving each deduction as it is made.
    ///
    /// The ordered sequence of calls is a complete audit log of a solve.
    pub fn set_callback_deduction(&mut self, callback: Box<CallbackDeduction>) {
        self.callback_deduction = Some(callback);
    }
}
