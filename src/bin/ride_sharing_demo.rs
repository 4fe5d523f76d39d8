//! Fixed demonstration of the ride/fare model: four rides, two drivers, two
//! riders, and their reports.

use std::error::Error;
use std::rc::Rc;

use colored::Colorize;

use rideshare::driver::Driver;
use rideshare::ride::Ride;
use rideshare::rider::Rider;

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", "=== Ride Sharing App Demonstration ===".bold());

    // =========================================================================
    // Rides: fare is computed per class and cached on each ride
    // =========================================================================

    let mut rides = vec![
        Ride::standard("R001", "123 Main St", "456 Oak Ave", 5.5)?,
        Ride::premium("R002", "789 Pine Rd", "321 Elm St", 8.2)?,
        Ride::standard("R003", "555 Broadway", "777 Market St", 3.0)?,
        Ride::premium("R004", "999 Park Ave", "111 Center St", 12.5)?,
    ];

    println!("\n{}", "=== FARE CALCULATION ===".bold());
    println!("Recomputing each fare from its class and printing the details:\n");

    for ride in &mut rides {
        let fare = ride.fare();
        ride.set_fare(fare);
        println!("{}\n", ride.details());
    }

    // hand the rides over to shared ownership before the aggregates take them
    let rides: Vec<Rc<Ride>> = rides.into_iter().map(Rc::new).collect();

    // =========================================================================
    // Drivers
    // =========================================================================

    println!("{}", "=== DRIVERS ===".bold());
    println!("Assigning rides to drivers:\n");

    let mut driver1 = Driver::new("D001", "John Smith", 4.8)?;
    let mut driver2 = Driver::new("D002", "Sarah Johnson", 4.9)?;

    driver1.add_ride(&rides[0]);
    driver1.add_ride(&rides[1]);
    driver2.add_ride(&rides[2]);
    driver2.add_ride(&rides[3]);

    println!("{}\n", driver1.info());
    println!("{}\n", driver2.info());

    // =========================================================================
    // Riders
    // =========================================================================

    println!("{}", "=== RIDERS ===".bold());
    println!("Riders requesting rides:\n");

    let mut rider1 = Rider::new("RDR001", "Alice Brown")?;
    let mut rider2 = Rider::new("RDR002", "Bob Wilson")?;

    rider1.request_ride(&rides[0]);
    rider1.request_ride(&rides[1]);
    rider2.request_ride(&rides[2]);
    rider2.request_ride(&rides[3]);

    println!("{}\n", rider1.view_rides());
    println!("{}\n", rider2.view_rides());

    // =========================================================================
    // Summary
    // =========================================================================

    println!("{}", "=== SUMMARY ===".bold());
    println!("Total rides created: {}", rides.len());
    println!("Total drivers: 2");
    println!("Total riders: 2");

    Ok(())
}
