use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use small_calc::{DivisionService, DomainError};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_divide_async_data_driven_cases() {
    let service = DivisionService::new();

    let cases = [
        (dec!(4), dec!(2), dec!(2)),
        (dec!(-4), dec!(2), dec!(-2)),
        (dec!(0), dec!(3), dec!(0)),
        (dec!(5), dec!(2), dec!(2.5)),
        (dec!(1), dec!(3), dec!(0.3333333333333333333333333333)),
        (dec!(2), dec!(3), dec!(0.6666666666666666666666666667)),
    ];

    for (dividend, divisor, expected) in cases {
        let quotient = service.divide_async(dividend, divisor).await.unwrap();
        assert_eq!(quotient, expected, "{} / {}", dividend, divisor);
    }
}

#[tokio::test]
async fn test_divide_async_by_zero_fails_for_any_dividend() {
    let service = DivisionService::new();

    for dividend in [dec!(5), dec!(0), dec!(-3)] {
        let result = service.divide_async(dividend, dec!(0)).await;
        assert!(matches!(result, Err(DomainError::DivisionByZero)));
    }
}

#[tokio::test]
async fn test_observer_sees_async_quotient_once_resolved() {
    let mut service = DivisionService::new();
    let seen: Arc<Mutex<Vec<Decimal>>> = Arc::new(Mutex::new(Vec::new()));

    let capture = Arc::clone(&seen);
    service.subscribe(move |quotient| capture.lock().unwrap().push(quotient));

    // Nothing is observed until the future resolves.
    let pending = service.divide_async(dec!(4), dec!(2));
    assert!(seen.lock().unwrap().is_empty());

    let quotient = pending.await.unwrap();

    assert_eq!(quotient, dec!(2));
    assert_eq!(seen.lock().unwrap().as_slice(), &[dec!(2)]);
}

#[tokio::test]
async fn test_concurrent_divisions_do_not_block_each_other() {
    let service = DivisionService::new();

    let (first, second) = tokio::join!(
        service.divide_async(dec!(5), dec!(2)),
        service.divide_async(dec!(9), dec!(3)),
    );

    assert_eq!(first.unwrap(), dec!(2.5));
    assert_eq!(second.unwrap(), dec!(3));
}
