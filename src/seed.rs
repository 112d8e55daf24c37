//! Mock fixtures loaded into a fresh platform.
//!
//! The admin pages and the partner pages each carried their own copy of the
//! order list; here they share one store. The partner queue for Karachi
//! Biryani House is numbered after the admin history (`ORD-006` onwards).

use crate::model::*;
use crate::planner::{DayPlan, Meal, MealPlan, NutritionGoals};

fn line(name: &str, quantity: u32, price: u32) -> LineItem {
    LineItem::new(name, quantity, price)
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: u32,
    customer: (&str, &str, &str),
    restaurant: &str,
    items: Vec<LineItem>,
    total: u32,
    status: OrderStatus,
    payment: (PaymentMethod, PaymentStatus),
    placed_at: &str,
) -> Order {
    let (customer_name, customer_phone, delivery_address) = customer;
    Order {
        id: OrderId(id),
        customer_name: customer_name.into(),
        customer_phone: customer_phone.into(),
        delivery_address: delivery_address.into(),
        restaurant: restaurant.into(),
        items,
        total,
        status,
        payment_method: payment.0,
        payment_status: payment.1,
        notes: None,
        placed_at: placed_at.into(),
        eta: None,
    }
}

pub fn orders() -> Vec<Order> {
    use PaymentMethod::*;
    use PaymentStatus::*;

    let mut orders = vec![
        order(
            1,
            ("Ahmed Khan", "+92 300 1234567", "Gulshan-e-Iqbal, Karachi"),
            "Karachi Biryani House",
            vec![line("Chicken Biryani", 2, 350)],
            800,
            OrderStatus::Completed,
            (CashOnDelivery, Paid),
            "2024-03-20 12:30 PM",
        ),
        order(
            2,
            ("Sara Ali", "+92 321 9876543", "Block 5, PECHS, Karachi"),
            "Healthy Bites",
            vec![line("Grilled Salad", 1, 450)],
            500,
            OrderStatus::OutForDelivery,
            (Card, Paid),
            "2024-03-20 1:15 PM",
        ),
        order(
            3,
            ("Bilal Hassan", "+92 333 5555555", "Clifton Block 4, Karachi"),
            "Lahore Tikka Corner",
            vec![line("Seekh Kebab", 4, 280)],
            1180,
            OrderStatus::Preparing,
            (CashOnDelivery, Pending),
            "2024-03-20 2:00 PM",
        ),
        order(
            4,
            ("Fatima Zahra", "+92 345 7777777", "DHA Phase 6, Karachi"),
            "Karachi Biryani House",
            vec![line("Mutton Biryani", 1, 450)],
            550,
            OrderStatus::Rejected,
            (Card, Refunded),
            "2024-03-19 7:30 PM",
        ),
        order(
            5,
            ("Hassan Raza", "+92 312 8888888", "North Nazimabad, Karachi"),
            "Green Bowl",
            vec![line("Protein Bowl", 2, 380)],
            810,
            OrderStatus::Completed,
            (Card, Paid),
            "2024-03-20 1:00 PM",
        ),
    ];

    let mut incoming = order(
        6,
        (
            "Ahmed Khan",
            "+92 300 1234567",
            "123 Main Street, Gulshan-e-Iqbal, Karachi",
        ),
        "Karachi Biryani House",
        vec![line("Chicken Biryani", 2, 350), line("Raita", 1, 50)],
        750,
        OrderStatus::New,
        (CashOnDelivery, Pending),
        "2 mins ago",
    );
    incoming.notes = Some("Less spicy please".into());

    let mut cooking = order(
        7,
        ("Sara Ali", "+92 321 9876543", "Block 5, PECHS, Karachi"),
        "Karachi Biryani House",
        vec![line("Seekh Kebab", 4, 280), line("Naan", 2, 30)],
        1180,
        OrderStatus::Preparing,
        (Card, Paid),
        "15 mins ago",
    );
    cooking.eta = Some(Eta::new(20, 30));

    let mut packed = order(
        8,
        ("Bilal Hassan", "+92 333 5555555", "Clifton Block 4, Karachi"),
        "Karachi Biryani House",
        vec![line("Chicken Biryani", 1, 350)],
        350,
        OrderStatus::Ready,
        (CashOnDelivery, Pending),
        "30 mins ago",
    );
    packed.notes = Some("Ring the bell twice".into());
    packed.eta = Some(Eta::new(10, 15));

    orders.extend([incoming, cooking, packed]);
    orders
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: u32,
    name: &str,
    owner: &str,
    email: &str,
    business_type: BusinessType,
    (cuisine, tags): (&str, &[&str]),
    status: RestaurantStatus,
    (rating, total_orders, revenue): (f32, u32, u64),
    joined: &str,
) -> Restaurant {
    Restaurant {
        id: RestaurantId(id),
        name: name.into(),
        owner: owner.into(),
        email: email.into(),
        owner_phone: String::new(),
        business_phone: String::new(),
        cnic: String::new(),
        business_type,
        cuisine: cuisine.into(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        status,
        rating,
        total_orders,
        revenue,
        joined: joined.into(),
    }
}

pub fn restaurants() -> Vec<Restaurant> {
    use RestaurantStatus::*;

    vec![
        restaurant(1, "Karachi Biryani House", "Muhammad Ali", "ali@kbh.pk", BusinessType::Restaurant, ("Pakistani", &["High Protein", "Spicy"]), Approved, (4.8, 1250, 875_000), "Jan 10, 2024"),
        restaurant(2, "Healthy Bites", "Ayesha Khan", "ayesha@healthybites.pk", BusinessType::Cafe, ("Healthy", &["Low Carb", "Fresh"]), Approved, (4.9, 890, 534_000), "Feb 15, 2024"),
        restaurant(3, "Home Kitchen Express", "Fatima Noor", "fatima@hke.pk", BusinessType::HomeChef, ("Pakistani", &["Balanced"]), Pending, (0.0, 0, 0), "Mar 20, 2024"),
        restaurant(4, "Lahore Tikka Corner", "Usman Shah", "usman@ltc.pk", BusinessType::Restaurant, ("BBQ", &["High Protein", "Grilled"]), Approved, (4.6, 567, 340_200), "Mar 01, 2024"),
        restaurant(5, "Fresh Delights", "Zainab Malik", "zainab@fd.pk", BusinessType::Cafe, ("Healthy", &["Fresh"]), Rejected, (0.0, 0, 0), "Mar 25, 2024"),
    ]
}

pub fn accounts() -> Vec<Account> {
    let account = |id, name: &str, email: &str, phone: &str, status, (orders, spent), joined: &str, last: &str| Account {
        id: AccountId(id),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        status,
        total_orders: orders,
        total_spent: spent,
        joined: joined.into(),
        last_active: last.into(),
    };

    vec![
        account(1, "Ahmed Khan", "ahmed@gmail.com", "+92 300 1234567", AccountStatus::Active, (45, 32_500), "Jan 15, 2024", "2 hours ago"),
        account(2, "Sara Ali", "sara.ali@gmail.com", "+92 321 9876543", AccountStatus::Suspended, (28, 21_000), "Feb 20, 2024", "1 day ago"),
        account(3, "Bilal Hassan", "bilal.h@gmail.com", "+92 333 5555555", AccountStatus::Suspended, (12, 8_500), "Mar 10, 2024", "1 week ago"),
        account(4, "Fatima Zahra", "fatima.z@gmail.com", "+92 345 7777777", AccountStatus::Active, (67, 48_000), "Dec 01, 2023", "5 mins ago"),
        account(5, "Hassan Raza", "hassan.r@gmail.com", "+92 312 8888888", AccountStatus::Banned, (3, 1_500), "Apr 05, 2024", "2 weeks ago"),
    ]
}

pub fn flagged_content() -> Vec<FlaggedContent> {
    let flag = |id, kind, restaurant: &str, reported_by: &str, reason: &str, content: &str, reported_at: &str, status| {
        FlaggedContent {
            id: FlagId(id),
            kind,
            restaurant: restaurant.into(),
            reported_by: reported_by.into(),
            reason: reason.into(),
            content: content.into(),
            reported_at: reported_at.into(),
            status,
        }
    };

    vec![
        flag(1, ContentKind::Review, "Karachi Biryani House", "Restaurant Owner", "Fake review", "This is the worst food I've ever had. Total scam!", "2 hours ago", ModerationStatus::Pending),
        flag(3, ContentKind::Menu, "Lahore Tikka Corner", "User", "Misleading information", "Claims 0 calories for biryani", "3 days ago", ModerationStatus::Pending),
        flag(4, ContentKind::Review, "Green Bowl", "Restaurant Owner", "Harassment", "The owner is a terrible person...", "1 week ago", ModerationStatus::Approved),
        flag(6, ContentKind::Menu, "Fresh Kitchen", "User", "Incorrect allergy info", "Item listed as nut-free but contains peanuts", "2 days ago", ModerationStatus::Pending),
    ]
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: MenuItemId(1),
            name: "Chicken Biryani".into(),
            description: "Aromatic basmati rice with tender chicken".into(),
            price: 350,
            calories: 650,
            macros: Macros::new(35, 70, 20),
            category: Category::MainCourse,
            tags: vec![DietTag::HighProtein],
            allergens: vec![Allergen::Gluten],
            prep_minutes: 25,
            availability: Availability::Available,
        },
        MenuItem {
            id: MenuItemId(2),
            name: "Seekh Kebab".into(),
            description: "Spiced minced meat skewers".into(),
            price: 280,
            calories: 320,
            macros: Macros::new(28, 8, 22),
            category: Category::Starters,
            tags: vec![DietTag::HighProtein, DietTag::LowCarb],
            allergens: vec![],
            prep_minutes: 15,
            availability: Availability::Available,
        },
        MenuItem {
            id: MenuItemId(3),
            name: "Raita".into(),
            description: "Yogurt with cucumber and spices".into(),
            price: 50,
            calories: 80,
            macros: Macros::new(4, 6, 5),
            category: Category::Sides,
            tags: vec![DietTag::LowFat],
            allergens: vec![Allergen::Dairy],
            prep_minutes: 5,
            availability: Availability::Available,
        },
        MenuItem {
            id: MenuItemId(4),
            name: "Mango Lassi".into(),
            description: "Sweet mango yogurt drink".into(),
            price: 120,
            calories: 220,
            macros: Macros::new(6, 40, 4),
            category: Category::Drinks,
            tags: vec![DietTag::Balanced],
            allergens: vec![Allergen::Dairy],
            prep_minutes: 5,
            availability: Availability::Unavailable,
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    let review = |id, customer: &str, rating, comment: &str, order_id: &str, date: &str| Review {
        id: ReviewId(id),
        customer: customer.into(),
        restaurant: "Karachi Biryani House".into(),
        rating,
        comment: comment.into(),
        order_id: order_id.into(),
        date: date.into(),
        reply: None,
        flag_reason: None,
    };

    let mut answered = review(
        2,
        "Sara Ali",
        4,
        "Good food, slightly late delivery but the quality made up for it. Seekh kebabs were excellent!",
        "ORD-002",
        "5 days ago",
    );
    answered.reply =
        Some("Thank you for your feedback! We're working on improving our delivery times.".into());

    vec![
        review(
            1,
            "Ahmed Khan",
            5,
            "Best biryani in Karachi! The portion size was generous and the taste was authentic. Will definitely order again.",
            "ORD-001",
            "2 days ago",
        ),
        answered,
        review(
            3,
            "Bilal Hassan",
            3,
            "Food was okay but could use more spices. The raita was good though.",
            "ORD-003",
            "1 week ago",
        ),
        review(
            4,
            "Fatima Zahra",
            5,
            "Absolutely loved it! The chicken was so tender and flavorful. Perfect for my fitness goals too with the macro info!",
            "ORD-004",
            "1 week ago",
        ),
    ]
}

/// The customer's sample week, Monday first.
pub fn meal_plan() -> MealPlan {
    let meal = |name: &str, calories, (protein, carbs, fat)| {
        Some(Meal::new(name, calories, Macros::new(protein, carbs, fat)))
    };

    MealPlan::with_days(
        NutritionGoals::default(),
        [
            DayPlan::new(
                meal("Paratha with Eggs", 450, (18, 42, 24)),
                meal("Chicken Biryani", 650, (35, 75, 22)),
                meal("Grilled Chicken Salad", 320, (38, 12, 14)),
            ),
            DayPlan::new(
                meal("Omelette with Toast", 380, (22, 28, 20)),
                meal("Seekh Kebab Platter", 520, (42, 18, 32)),
                meal("Daal Chawal", 480, (18, 72, 12)),
            ),
            DayPlan::new(
                meal("Halwa Puri", 620, (12, 68, 35)),
                None,
                meal("Chicken Karahi", 550, (40, 15, 38)),
            ),
            DayPlan::new(
                meal("Cereal with Milk", 280, (10, 48, 6)),
                meal("Vegetable Biryani", 480, (12, 82, 14)),
                None,
            ),
            DayPlan::new(
                None,
                meal("Fish Fry with Rice", 580, (38, 52, 24)),
                meal("Mutton Karahi", 620, (45, 12, 42)),
            ),
            DayPlan::new(
                meal("Nihari with Naan", 720, (35, 58, 40)),
                meal("Chapli Kebab", 380, (28, 12, 24)),
                meal("Grilled Fish", 320, (42, 8, 14)),
            ),
            DayPlan::new(
                meal("Eggs Benedict", 420, (24, 32, 26)),
                meal("Chicken Handi", 520, (38, 18, 34)),
                None,
            ),
        ],
    )
}
