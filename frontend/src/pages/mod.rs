pub mod lucky_spin;
