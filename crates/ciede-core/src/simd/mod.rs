//! Runtime-dispatched batch kernels
//!
//! The per-row color difference loop is compiled once per target feature
//! set with the `multiversion` crate and the best build is picked at
//! runtime. The loop body stays scalar (each row calls libm trig and exp),
//! so dispatch mainly buys wider codegen for the surrounding arithmetic.
//!
//! None of the targets enable FMA contraction, so every dispatch path
//! produces bit-identical results.

mod batch;

pub use batch::{delta_e_2000_batch, delta_e_2000_batch_weighted};

/// Name of the target the batch kernel dispatches to on this CPU
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_features_names_a_dispatch_target() {
        let features = active_features();
        assert!(["AVX2", "SSE4.1", "NEON", "scalar"].contains(&features));
    }
}
