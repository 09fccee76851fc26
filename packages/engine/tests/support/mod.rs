pub mod sql;
pub mod strategy_test;

#[macro_export]
macro_rules! strategy_test {
    ($name:ident, |$harness:ident| $body:expr) => {
        paste::paste! {
            #[test]
            fn [<$name _splice>]() {
                let $harness = $crate::support::strategy_test::Harness::new(
                    rowcap_engine::SynthesisStrategy::Splice,
                );
                $body
            }

            #[test]
            fn [<$name _reparse>]() {
                let $harness = $crate::support::strategy_test::Harness::new(
                    rowcap_engine::SynthesisStrategy::Reparse,
                );
                $body
            }
        }
    };
}
