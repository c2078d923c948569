//! Lattice law compliance helpers.
//!
//! Exhaustive checks over a sample of levels (the concrete lattices
//! here have tiny domains, so the sample is the whole domain). The
//! operator results being independent of iteration order rests on
//! exactly these laws.

use morpho_core::Lattice;

/// Assert commutativity, associativity, idempotence, and order
/// consistency of `join` and `meet`, plus the `bot`/`top` bounds, over
/// every combination drawn from `levels`.
pub fn assert_lattice_laws<L: Lattice>(lattice: &L, levels: &[L::Level]) {
    for a in levels {
        // Idempotence and bounds.
        assert_eq!(&lattice.join(a, a).unwrap(), a, "join not idempotent");
        assert_eq!(&lattice.meet(a, a).unwrap(), a, "meet not idempotent");
        assert!(lattice.le(&lattice.bot(), a).unwrap(), "bot not least");
        assert!(lattice.le(a, &lattice.top()).unwrap(), "top not greatest");

        for b in levels {
            // Commutativity.
            assert_eq!(
                lattice.join(a, b).unwrap(),
                lattice.join(b, a).unwrap(),
                "join not commutative"
            );
            assert_eq!(
                lattice.meet(a, b).unwrap(),
                lattice.meet(b, a).unwrap(),
                "meet not commutative"
            );

            // Order consistency.
            let j = lattice.join(a, b).unwrap();
            let m = lattice.meet(a, b).unwrap();
            assert!(lattice.le(a, &j).unwrap(), "join below operand");
            assert!(lattice.le(b, &j).unwrap(), "join below operand");
            assert!(lattice.le(&m, a).unwrap(), "meet above operand");
            assert!(lattice.le(&m, b).unwrap(), "meet above operand");

            for c in levels {
                // Associativity.
                let left = lattice.join(&lattice.join(a, b).unwrap(), c).unwrap();
                let right = lattice.join(a, &lattice.join(b, c).unwrap()).unwrap();
                assert_eq!(left, right, "join not associative");

                let left = lattice.meet(&lattice.meet(a, b).unwrap(), c).unwrap();
                let right = lattice.meet(a, &lattice.meet(b, c).unwrap()).unwrap();
                assert_eq!(left, right, "meet not associative");
            }
        }
    }
}
