//! An S-box is evaluated by treating it as eight 8-variable Boolean
//! functions — one per output bit — and asking how far each is from being
//! linear, how predictably it avalanches, and how its output bits depend on
//! each other.
//!
//! # Nonlinearity and the Walsh-Hadamard transform
//!
//! A Boolean function is linear if it can be written as a dot product with
//! some fixed mask, `w . x`. [Nonlinearity](crate::sbox::metric::nonlinearity)
//! is the minimum Hamming distance from a function to the nearest such affine
//! function, and it is read directly off the function's Walsh spectrum: the
//! larger the biggest Walsh coefficient, the closer the function sits to some
//! linear approximation, and the lower its nonlinearity. An S-box with low
//! nonlinearity leaks a good linear approximation an attacker can exploit
//! (see [linear cryptanalysis](crate::doc::encryption#confusion)).
//!
//! # Strict avalanche and bit independence
//!
//! [SAC](crate::sbox::metric::sac) asks: if one input bit flips, does each
//! output bit flip about half the time? [BIC-SAC and
//! BIC-NL](crate::sbox::metric::bic_sac) ask the same question one level up
//! — do *pairs* of output bits avalanche and stay nonlinear independently of
//! each other, or do they move together in some exploitable way?
//!
//! # Differential uniformity
//!
//! The [DDT](crate::sbox::table::Ddt) tabulates, for every input difference,
//! how many input pairs produce every possible output difference. A large
//! entry away from the all-zero difference is exactly the kind of
//! high-probability differential [differential cryptanalysis](crate::doc::encryption#confusion)
//! chases; the S-box's differential uniformity is the size of the worst
//! such entry.
