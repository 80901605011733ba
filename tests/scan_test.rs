use factor_scan::{describe, LongestScan, PrimeBuffer, PrimeBufferExt, PrimeCache, ScanConfig};

#[test]
fn default_range_scan_test() {
    let config = ScanConfig::default();
    assert_eq!(config.upper_bound, 100_000);

    let mut scan = LongestScan::new(config);
    let records: Vec<_> = scan.by_ref().collect();
    assert!(!records.is_empty());

    let last = records.last().unwrap();
    assert_eq!(scan.best(), Some(last));
    assert_eq!(last.factors.iter().product::<u64>(), last.value);
    assert_eq!(last.description, describe(&last.factors));

    // the final record is at least as long as any description in the range
    let mut pb = PrimeCache::<u64>::new();
    for n in 2..=100_000u64 {
        let desc = describe(&pb.prime_factors(n));
        assert!(
            desc.len() <= last.len(),
            "{} = {} is longer than the final record {} = {}",
            desc, n, last.description, last.value
        );
    }

    // the scan and the check above needed the same primes
    assert_eq!(scan.cache().primes(), pb.primes());
}

#[test]
fn resumed_cache_scan_test() {
    let cold = LongestScan::new(ScanConfig::new(30_000u32)).run().unwrap();

    let mut cache = PrimeCache::new();
    cache.reserve_until(1_000u32);
    let warm = LongestScan::with_cache(ScanConfig::new(30_000u32), cache).run().unwrap();
    assert_eq!(cold, warm);
}
