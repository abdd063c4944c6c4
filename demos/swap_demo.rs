//! Swap Demonstration
//!
//! Walks through the ways of calling the complex vector swap: plain slices,
//! reversed strides, offset addressing, ndarray views, and the checked form
//! reporting a bad request instead of panicking.

use ndarray::{array, s};
use zswap::{try_zswap, zswap, zswap_ndarray, zswap_view, Complex64, ZswapError};

fn show(name: &str, v: &[Complex64]) {
    let items: Vec<String> = v.iter().map(|z| format!("{}{:+}i", z.re, z.im)).collect();
    println!("   {name} = [{}]", items.join(", "));
}

fn main() {
    let c = Complex64::new;

    println!("Example 1: contiguous swap");
    let mut x = vec![c(1.0, 2.0), c(3.0, 4.0)];
    let mut y = vec![c(5.0, 6.0), c(7.0, 8.0)];
    zswap(2, &mut x, 1, &mut y, 1);
    show("x", &x);
    show("y", &y);
    println!();

    println!("Example 2: x walked backwards (incx = -1)");
    let mut x = vec![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)];
    let mut y = vec![c(0.0, 1.0), c(0.0, 2.0), c(0.0, 3.0)];
    zswap(3, &mut x, -1, &mut y, 1);
    show("x", &x);
    show("y", &y);
    println!();

    println!("Example 3: every second element of x from offset 1");
    let mut x = vec![c(0.0, 0.0), c(1.0, 1.0), c(0.0, 0.0), c(2.0, 2.0)];
    let mut y = vec![c(9.0, 9.0), c(8.0, 8.0)];
    zswap_ndarray(2, &mut x, 2, 1, &mut y, 1, 0);
    show("x", &x);
    show("y", &y);
    println!();

    println!("Example 4: reversed ndarray view");
    let mut xa = array![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)];
    let mut ya = array![c(4.0, 0.0), c(5.0, 0.0), c(6.0, 0.0)];
    match zswap_view(&mut xa.slice_mut(s![..;-1]), &mut ya) {
        Ok(()) => {
            show("x", &xa.to_vec());
            show("y", &ya.to_vec());
        }
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    println!("Example 5: checked swap with a short vector");
    let mut x = vec![c(1.0, 0.0); 3];
    let mut y = vec![c(2.0, 0.0); 5];
    match try_zswap(3, &mut x, 2, &mut y, 1) {
        Ok(()) => println!("   Unexpected success"),
        Err(ZswapError::InsufficientLength {
            vector, required, ..
        }) => println!("   {vector} needs {required} elements"),
        Err(e) => println!("   Error: {e}"),
    }
}
