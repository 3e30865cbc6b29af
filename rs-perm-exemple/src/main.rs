use rs_perm_core::generator::{GeneratorError, PermutationGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Enumerate every permutation of 0..2 lazily:
    // each call to 'next' performs exactly one adjacent swap
    let mut generator = PermutationGenerator::new(3)?;
    println!("All permutations of 0..{}:", generator.size() - 1);
    while generator.has_next() {
        println!("{:?}", generator.next()?);
    }

    // With an offset the values are presented as offset..offset+n-1;
    // internally the generator still tracks 0..n-1
    let mut classic = PermutationGenerator::with_offset(4, 1)?;
    println!("\nFirst five permutations of 1..4:");
    for _ in 0..5 {
        println!("{:?}", classic.next()?);
    }

    // The size must be non-negative
    match PermutationGenerator::new(-1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\nA size of -1 is invalid: {e}"),
    }

    // Once 'has_next' is false, 'next' keeps failing without touching state
    let mut exhausted = PermutationGenerator::new(1)?;
    println!("\nOnly permutation of a single value: {:?}", exhausted.next()?);
    match exhausted.next() {
        Ok(_) => println!("Should not happen"),
        Err(GeneratorError::ExhaustedIterator) => println!("The generator is exhausted"),
        Err(e) => println!("Unexpected error: {e}"),
    }

    Ok(())
}
