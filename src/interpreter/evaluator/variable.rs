use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::{Context, EvalResult, Mode, Notifier, SENTINEL, ValueSource},
        value::complex::ComplexNumber,
    },
};

impl Context<'_> {
    /// Resolves a variable reference.
    ///
    /// In comparison mode this is always [`SENTINEL`]. Otherwise a value
    /// already bound in this session is reused; an unbound variable is
    /// requested from the value source, evaluated as an expression of its
    /// own, bound, and announced through the notifier.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// The value of the variable.
    ///
    /// # Errors
    /// - `InputCancelled` if the value source is cancelled.
    /// - `InputEmpty` if the typed text is blank.
    /// - `InputInvalid` if the typed text fails to parse or evaluate.
    pub(crate) fn eval_variable(&mut self, name: &str) -> EvalResult<ComplexNumber> {
        let Mode::Interactive { source, notifier } = &mut self.mode else {
            return Ok(SENTINEL);
        };

        if let Some(value) = self.variables.get(name) {
            log::debug!("variable {name} already bound to {value}");
            return Ok(value);
        }

        log::debug!("requesting a value for {name}");
        let text = source.request_value(name)
                         .ok_or_else(|| RuntimeError::InputCancelled { name: name.to_string() })?;

        if text.trim().is_empty() {
            return Err(RuntimeError::InputEmpty { name: name.to_string() });
        }

        let value = evaluate_typed_value(&text, &mut **source, &mut **notifier).map_err(|e| {
                        RuntimeError::InputInvalid { name:   name.to_string(),
                                                     source: Box::new(e), }
                    })?;

        self.variables.insert(name, value);
        notifier.notify(&format!("variable bound: {name} = {value}"), false);
        Ok(value)
    }
}

/// Runs the whole pipeline on text typed in for a variable.
///
/// The text gets a store of its own, so it cannot see the variables of the
/// expression that asked for it. It may reference further unbound variables,
/// which are requested from the same source.
fn evaluate_typed_value<'io>(text: &str,
                             source: &'io mut dyn ValueSource,
                             notifier: &'io mut dyn Notifier)
                             -> Result<ComplexNumber, Error> {
    let expr = crate::parse(text)?;
    let mut nested = Context::interactive(source, notifier);
    Ok(nested.eval(&expr)?)
}
