//! Parallel batch evaluation.

use ck_kernel::{CellInput, EnergyMode, FailureReason, Kernel, KernelError, builtin};

fn kernel() -> Kernel {
    Kernel::new(&builtin::san_diego_h2()).unwrap()
}

fn cells(kernel: &Kernel, n: usize) -> Vec<CellInput> {
    let y = vec![1.0 / 9.0; kernel.num_species()];
    (0..n)
        .map(|i| {
            let t = 400.0 + 25.0 * i as f64;
            let mode = if i % 2 == 0 {
                EnergyMode::InternalEnergy
            } else {
                EnergyMode::Enthalpy
            };
            let energy = match mode {
                EnergyMode::InternalEnergy => kernel.specific_internal_energy(t, &y).unwrap(),
                EnergyMode::Enthalpy => kernel.specific_enthalpy(t, &y).unwrap(),
            };
            CellInput {
                rho: 0.1 + 0.01 * i as f64,
                energy,
                t_guess: t + 5.0,
                y: y.clone(),
                mode,
            }
        })
        .collect()
}

#[test]
fn batch_matches_serial_in_order() {
    let k = kernel();
    let cells = cells(&k, 64);
    let batch = k.evaluate_cells(&cells);
    assert_eq!(batch.len(), cells.len());
    for (cell, result) in cells.iter().zip(&batch) {
        let serial = k.evaluate(cell).unwrap();
        let parallel = result.as_ref().unwrap();
        assert_eq!(parallel, &serial);
    }
}

#[test]
fn batch_is_repeatable() {
    let k = kernel();
    let cells = cells(&k, 32);
    assert_eq!(k.evaluate_cells(&cells), k.evaluate_cells(&cells));
}

#[test]
fn failing_cells_do_not_poison_the_batch() {
    let k = kernel();
    let mut cells = cells(&k, 8);
    cells[2].t_guess = 10_000.0;
    cells[5].y = vec![0.0; 9];
    cells[6].y = vec![1.0];

    let results = k.evaluate_cells(&cells);
    for (i, result) in results.iter().enumerate() {
        match i {
            2 => assert!(matches!(
                result,
                Err(KernelError::TemperatureInversionFailed(e))
                    if e.reason() == FailureReason::OutOfRange
            )),
            5 => assert!(matches!(
                result,
                Err(KernelError::TemperatureInversionFailed(e))
                    if e.reason() == FailureReason::DegenerateDerivative
            )),
            6 => assert!(matches!(
                result,
                Err(KernelError::LengthMismatch {
                    expected: 9,
                    actual: 1
                })
            )),
            _ => assert!(result.is_ok(), "cell {i}: {result:?}"),
        }
    }
}

#[test]
fn empty_batch() {
    assert!(kernel().evaluate_cells(&[]).is_empty());
}
