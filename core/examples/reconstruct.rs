use shamir_core::{
    lagrange_coefficients_at_zero, verify, ReconstructionPolicy, SecretReconstructor, Share,
};

const PRIME: u64 = 2087;
const EXPECTED: u64 = 1234;

fn main() {
    let shares = [Share::new(1, 1494), Share::new(2, 1942), Share::new(3, 491)];
    let reconstructor =
        SecretReconstructor::new(ReconstructionPolicy::strict().with_threshold(shares.len()));

    let secret = reconstructor
        .reconstruct(&shares, PRIME)
        .expect("reference shares should reconstruct");
    println!("Recovered: {secret} | Expected: {EXPECTED}");
    println!("{}", verify(secret, EXPECTED));

    let xs: Vec<u64> = shares.iter().map(|share| share.x).collect();
    let weights =
        lagrange_coefficients_at_zero(&xs, PRIME).expect("x-values are distinct");
    println!("Lagrange weights at zero: {weights:?}");

    let reconstructor = SecretReconstructor::default();
    match reconstructor.reconstruct(&shares[..2], PRIME) {
        Ok(value) => println!("Two shares give {value}: {}", verify(value, EXPECTED)),
        Err(err) => println!("Two shares fail: {err}"),
    }
}
