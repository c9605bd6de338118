// src/labels/defaults.rs

use super::LabelField;
use crate::domain::Language;

pub fn default_label(language: Language, field: LabelField) -> &'static str {
    match language {
        Language::En => english(field),
        Language::Ar => arabic(field),
    }
}

fn english(field: LabelField) -> &'static str {
    use LabelField::*;
    match field {
        Confirmed => "Booking Confirmed",
        ConfirmationMessage => "Your reservation has been successfully confirmed",
        BookingDetails => "Booking Details",
        BookingReference => "Booking Reference",
        GuestName => "Guest Name",
        Email => "Email",
        StayDetails => "Stay Details",
        CheckIn => "Check-in",
        CheckOut => "Check-out",
        CheckInTime => "From 4:00 PM",
        CheckOutTime => "Until 12:00 PM",
        RoomDetails => "Room Details",
        RoomType => "Room Type",
        NumberOfRooms => "Number of Rooms",
        Rating => "Rating",
        MealServices => "Meal Services",
        Breakfast => "Breakfast",
        Lunch => "Lunch",
        Dinner => "Dinner",
        NotSelected => "Not selected",
        PriceBreakdown => "Price Breakdown",
        RoomCharges => "Room Charges",
        MealCharges => "Meal Charges",
        TotalAmount => "Total Amount",
        PaymentStatus => "Payment Status",
        Paid => "Paid",
        ImportantNotes => "Important Notes",
        Note1 => "Please present this confirmation and a valid ID at check-in.",
        Note2 => "Early check-in and late check-out are subject to availability.",
        Note3 => "Meal services are served at the hotel restaurant at set hours.",
        Note4 => "For changes or cancellations, contact the hotel directly.",
        Currency => "SAR",
        GeneratedOn => "Generated on",
    }
}

// Currency stays "SAR" in Arabic: codes and digits are not localized.
fn arabic(field: LabelField) -> &'static str {
    use LabelField::*;
    match field {
        Confirmed => "تم تأكيد الحجز",
        ConfirmationMessage => "تم تأكيد حجزك بنجاح",
        BookingDetails => "تفاصيل الحجز",
        BookingReference => "رقم الحجز",
        GuestName => "اسم الضيف",
        Email => "البريد الإلكتروني",
        StayDetails => "تفاصيل الإقامة",
        CheckIn => "تاريخ الوصول",
        CheckOut => "تاريخ المغادرة",
        CheckInTime => "من الساعة 4:00 مساء",
        CheckOutTime => "حتى الساعة 12:00 ظهرا",
        RoomDetails => "تفاصيل الغرفة",
        RoomType => "نوع الغرفة",
        NumberOfRooms => "عدد الغرف",
        Rating => "التقييم",
        MealServices => "خدمات الوجبات",
        Breakfast => "الإفطار",
        Lunch => "الغداء",
        Dinner => "العشاء",
        NotSelected => "غير مختار",
        PriceBreakdown => "تفاصيل السعر",
        RoomCharges => "رسوم الغرف",
        MealCharges => "رسوم الوجبات",
        TotalAmount => "المبلغ الإجمالي",
        PaymentStatus => "حالة الدفع",
        Paid => "مدفوع",
        ImportantNotes => "ملاحظات هامة",
        Note1 => "يرجى تقديم هذا التأكيد وهوية سارية عند تسجيل الوصول.",
        Note2 => "الوصول المبكر والمغادرة المتأخرة حسب التوفر.",
        Note3 => "تقدم الوجبات في مطعم الفندق في أوقات محددة.",
        Note4 => "للتعديل أو الإلغاء يرجى التواصل مع الفندق مباشرة.",
        Currency => "SAR",
        GeneratedOn => "تاريخ الإصدار",
    }
}
